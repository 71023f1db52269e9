use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::board::SIZE;
use crate::core::state::{EXIT_MESSAGE, EXIT_TITLE, Game, Phase};
use crate::tui::component::Component;
use crate::tui::components::{BoardView, ConfirmDialog, StatusBar};

pub const TITLE: &str = "==== 2048 ====";
pub const HELP_TEXT: &str = "Use arrow keys (or h j k l) to move. Press q to quit.";
pub const GAME_OVER_TEXT: &str = "GAME OVER! Press any key to exit.";

pub fn draw_ui(frame: &mut Frame, game: &Game, color: bool) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),           // title
        Length(1),           // spacer
        Length(SIZE as u16), // grid
        Length(1),           // spacer
        Length(1),           // help
        Length(1),           // status
        Length(1),           // spacer
        Length(1),           // game over
        Min(0),
    ]);
    let area = frame.area();
    let [title_area, _, grid_area, _, help_area, status_area, _, over_area, _] =
        layout.areas(area);

    frame.render_widget(
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        title_area,
    );
    BoardView::new(game.board, color).render(frame, grid_area);
    frame.render_widget(Span::raw(HELP_TEXT), help_area);
    StatusBar::new(game.moves, game.board.max_tile()).render(frame, status_area);

    match game.phase {
        Phase::GameOver => {
            let style = if color {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            frame.render_widget(Span::styled(GAME_OVER_TEXT, style), over_area);
        }
        Phase::ConfirmingExit => {
            ConfirmDialog::new(EXIT_TITLE, EXIT_MESSAGE).render(frame, area);
        }
        Phase::Playing | Phase::Terminated => {}
    }
}
