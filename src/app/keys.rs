//! Key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Route, Screen};
use crate::format::embed_url;

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();
        self.status = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if matches!(self.screen, Screen::Login(_)) {
            return self.handle_login_key(key);
        }
        if matches!(&self.screen, Screen::Home(home) if home.search_focused) {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('1') => self.navigate(Route::Home),
            KeyCode::Char('2') => self.navigate(Route::Trending),
            KeyCode::Char('3') => self.navigate(Route::Gaming),
            KeyCode::Char('4') => self.navigate(Route::SavedVideos),
            KeyCode::Char('m') => self.toggle_sidebar(),
            KeyCode::Char('L') => self.logout(),
            KeyCode::Char('r') => self.retry(),
            KeyCode::Esc => {
                self.back();
            }
            KeyCode::Char('/') => {
                if let Screen::Home(home) = &mut self.screen {
                    home.search_focused = true;
                }
            }
            KeyCode::Char('c') => self.clear_search(),
            KeyCode::Char('l') => self.react(true),
            KeyCode::Char('d') => self.react(false),
            KeyCode::Char('s') => self.toggle_save(),
            KeyCode::Char('o') => self.open_player(),
            KeyCode::Left => self.move_selection(-1),
            KeyCode::Right => self.move_selection(1),
            KeyCode::Up => {
                let step = self.row_step();
                self.move_selection(-step);
            }
            KeyCode::Down => {
                let step = self.row_step();
                self.move_selection(step);
            }
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let Screen::Login(form) = &mut self.screen else {
            return;
        };

        match key.code {
            KeyCode::Enter => self.submit_login(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.switch_field(),
            KeyCode::Char('p') if control => form.toggle_password(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) if !control => form.insert_char(c),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let Screen::Home(home) = &mut self.screen else {
            return;
        };

        match key.code {
            KeyCode::Enter => {
                if home.commit_search() {
                    tracing::info!(search = %home.committed_search(), "search");
                    self.fetch_current();
                }
            }
            KeyCode::Esc => home.search_focused = false,
            KeyCode::Backspace => {
                home.search_input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                home.search_input.push(c)
            }
            _ => {}
        }
    }

    /// Reset the search and refetch unfiltered. Only offered by the
    /// no-results panel.
    fn clear_search(&mut self) {
        let Screen::Home(home) = &mut self.screen else {
            return;
        };
        if !home.listing.is_empty_result() {
            return;
        }
        home.clear_search();
        self.fetch_current();
    }

    /// Like (`true`) or dislike (`false`) a loaded video.
    fn react(&mut self, like: bool) {
        let Screen::Detail(detail) = &mut self.screen else {
            return;
        };
        if detail.video.data().is_none() {
            return;
        }
        if like {
            detail.reactions.toggle_like();
        } else {
            detail.reactions.toggle_dislike();
        }
    }

    fn toggle_save(&mut self) {
        if let Screen::Detail(detail) = &self.screen {
            if let Some(video) = detail.video.data() {
                self.saved.toggle(video.to_summary());
            }
        }
    }

    fn open_player(&mut self) {
        let Screen::Detail(detail) = &self.screen else {
            return;
        };
        let Some(video) = detail.video.data() else {
            return;
        };

        let url = embed_url(&video.video_url);
        tracing::info!(%url, "opening player");
        if let Err(err) = webbrowser::open(&url) {
            tracing::warn!(error = %err, "failed to open browser");
            self.status = Some(format!("Could not open browser: {}", url));
        }
    }

    /// Cards per row of the mounted view; the saved list is one column.
    fn row_step(&self) -> isize {
        match &self.screen {
            Screen::Saved(_) => 1,
            _ => self.grid_columns() as isize,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let saved_len = self.saved.len();
        match &mut self.screen {
            Screen::Home(home) => home.listing.move_selection(delta),
            Screen::Listing(listing) => listing.move_selection(delta),
            Screen::Saved(saved) => saved.move_selection(delta, saved_len),
            Screen::Login(_) | Screen::Detail(_) => {}
        }
    }

    fn open_selected(&mut self) {
        let id = match &self.screen {
            Screen::Home(home) => home.listing.selected_video().map(|v| v.id.clone()),
            Screen::Listing(listing) => listing.selected_video().map(|v| v.id.clone()),
            Screen::Saved(saved) => self.saved.list().get(saved.selected).map(|v| v.id.clone()),
            Screen::Login(_) | Screen::Detail(_) => None,
        };
        if let Some(id) = id {
            self.navigate(Route::Video(id));
        }
    }
}
