use crate::core::state::{App, Tab};
use crate::tui::component::Component;
use crate::tui::components::{AboutScreen, HomeScreen, NavBar, QuotePager, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, nav_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    match app.tab {
        Tab::Home => {
            let random = app.random.borrow();
            HomeScreen::new(&random, spinner_frame).render(frame, main_area);
        }
        Tab::Quotes => {
            let listing = app.listing.borrow();
            QuotePager::new(&listing, app.page, spinner_frame).render(frame, main_area);
        }
        Tab::About => AboutScreen.render(frame, main_area),
    }

    NavBar::new(app.tab).render(frame, nav_area);
}
