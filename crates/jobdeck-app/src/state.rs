// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{EMBED_PAGES, ViewMode, master_list};

/// Selection state of the report switcher. Selection clamps: an index
/// outside the catalog is silently ignored. The loading flag is cosmetic
/// and cleared by a delayed event, never by the embed target itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedSwitcher {
    pub active: usize,
    pub loading: bool,
}

impl Default for EmbedSwitcher {
    fn default() -> Self {
        Self {
            active: 0,
            loading: false,
        }
    }
}

/// Selection state of the analysis switcher. Next/previous wrap modulo the
/// master-list length; menu selection closes the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelSwitcher {
    pub active: usize,
    pub menu_open: bool,
    pub menu_cursor: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub view_mode: ViewMode,
    pub embed: EmbedSwitcher,
    pub panels: PanelSwitcher,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            embed: EmbedSwitcher::default(),
            panels: PanelSwitcher::default(),
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SetViewMode(ViewMode),
    CycleViewMode,
    SelectEmbedPage(usize),
    EmbedLoadingCleared,
    NextPanel,
    PrevPanel,
    SelectPanel(usize),
    OpenPanelMenu,
    ClosePanelMenu,
    MoveMenuCursor(isize),
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ViewModeChanged(ViewMode),
    EmbedPageChanged(usize),
    EmbedLoadingStarted,
    EmbedLoadingCleared,
    /// The active panel changed; the old panel session must be discarded
    /// and a fresh one mounted from the new panel's default record.
    PanelChanged(usize),
    PanelMenuToggled(bool),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::SetViewMode(mode) => self.set_view_mode(mode),
            AppCommand::CycleViewMode => self.set_view_mode(self.view_mode.cycled()),
            AppCommand::SelectEmbedPage(index) => {
                if index >= EMBED_PAGES.len() {
                    return Vec::new();
                }
                // Re-selecting the current page still retriggers the flag.
                self.embed.active = index;
                self.embed.loading = true;
                vec![
                    AppEvent::EmbedPageChanged(index),
                    AppEvent::EmbedLoadingStarted,
                ]
            }
            AppCommand::EmbedLoadingCleared => {
                if !self.embed.loading {
                    return Vec::new();
                }
                self.embed.loading = false;
                vec![AppEvent::EmbedLoadingCleared]
            }
            AppCommand::NextPanel => self.rotate_panel(1),
            AppCommand::PrevPanel => self.rotate_panel(-1),
            AppCommand::SelectPanel(index) => {
                let list = master_list();
                let Some(descriptor) = list.get(index) else {
                    return Vec::new();
                };
                let mut events = Vec::new();
                if self.panels.menu_open {
                    self.panels.menu_open = false;
                    events.push(AppEvent::PanelMenuToggled(false));
                }
                if !descriptor.is_selectable() {
                    return events;
                }
                self.panels.active = index;
                events.push(AppEvent::PanelChanged(index));
                events
            }
            AppCommand::OpenPanelMenu => {
                self.panels.menu_open = true;
                self.panels.menu_cursor = self.panels.active;
                vec![AppEvent::PanelMenuToggled(true)]
            }
            AppCommand::ClosePanelMenu => {
                if !self.panels.menu_open {
                    return Vec::new();
                }
                self.panels.menu_open = false;
                vec![AppEvent::PanelMenuToggled(false)]
            }
            AppCommand::MoveMenuCursor(delta) => {
                if !self.panels.menu_open {
                    return Vec::new();
                }
                let len = master_list().len() as isize;
                let next = (self.panels.menu_cursor as isize + delta).rem_euclid(len);
                self.panels.menu_cursor = next as usize;
                Vec::new()
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn set_view_mode(&mut self, mode: ViewMode) -> Vec<AppEvent> {
        self.view_mode = mode;
        vec![AppEvent::ViewModeChanged(mode)]
    }

    // Plain circular rotation. Only the menu path refuses disabled
    // entries; prev/next can land on one, and the panel area shows its
    // placeholder.
    fn rotate_panel(&mut self, delta: isize) -> Vec<AppEvent> {
        let list = master_list();
        if list.is_empty() {
            return Vec::new();
        }
        let len = list.len() as isize;
        let next = (self.panels.active as isize + delta).rem_euclid(len);
        self.panels.active = next as usize;
        vec![AppEvent::PanelChanged(self.panels.active)]
    }

    pub fn active_embed_url(&self) -> &'static str {
        EMBED_PAGES[self.embed.active].embed_url
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::{EMBED_PAGES, PanelKind, ViewMode, master_list};

    fn first_disabled_index() -> usize {
        master_list()
            .iter()
            .position(|panel| !panel.is_selectable())
            .expect("catalog has a disabled entry")
    }

    #[test]
    fn next_then_previous_returns_to_the_start_for_every_index() {
        let list = master_list();
        for start in 0..list.len() {
            let mut state = AppState::default();
            state.panels.active = start;
            state.dispatch(AppCommand::NextPanel);
            state.dispatch(AppCommand::PrevPanel);
            assert_eq!(state.panels.active, start, "starting at {start}");
        }
    }

    #[test]
    fn panel_rotation_wraps_at_the_ends() {
        let list = master_list();
        let mut state = AppState::default();
        state.panels.active = 0;
        state.dispatch(AppCommand::PrevPanel);
        assert_eq!(state.panels.active, list.len() - 1);

        state.dispatch(AppCommand::NextPanel);
        assert_eq!(state.panels.active, 0);
    }

    #[test]
    fn selecting_a_disabled_entry_never_changes_the_active_index() {
        let disabled = first_disabled_index();
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenPanelMenu);
        let events = state.dispatch(AppCommand::SelectPanel(disabled));
        assert_eq!(state.panels.active, 0);
        // The menu still closes; only the selection is refused.
        assert_eq!(events, vec![AppEvent::PanelMenuToggled(false)]);
        assert!(!state.panels.menu_open);
    }

    #[test]
    fn selecting_out_of_range_panel_is_ignored() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::SelectPanel(master_list().len()));
        assert!(events.is_empty());
        assert_eq!(state.panels.active, 0);
    }

    #[test]
    fn menu_selection_closes_the_menu_and_remounts() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenPanelMenu);
        assert!(state.panels.menu_open);

        let events = state.dispatch(AppCommand::SelectPanel(3));
        assert_eq!(
            events,
            vec![AppEvent::PanelMenuToggled(false), AppEvent::PanelChanged(3)]
        );
        assert_eq!(state.panels.active, 3);
        assert_eq!(master_list()[3].kind, PanelKind::MarketSegmentation);
    }

    #[test]
    fn embed_selection_ignores_out_of_range_indexes() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::SelectEmbedPage(EMBED_PAGES.len()));
        assert!(events.is_empty());
        assert_eq!(state.embed.active, 0);
        assert!(!state.embed.loading);
    }

    #[test]
    fn embed_selection_sets_the_frame_source_verbatim() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::SelectEmbedPage(2));
        assert_eq!(
            events,
            vec![
                AppEvent::EmbedPageChanged(2),
                AppEvent::EmbedLoadingStarted
            ]
        );
        assert_eq!(state.active_embed_url(), EMBED_PAGES[2].embed_url);
        assert!(state.embed.loading);
    }

    #[test]
    fn reselecting_the_current_embed_page_retriggers_loading() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SelectEmbedPage(1));
        state.dispatch(AppCommand::EmbedLoadingCleared);
        assert!(!state.embed.loading);

        let events = state.dispatch(AppCommand::SelectEmbedPage(1));
        assert!(events.contains(&AppEvent::EmbedLoadingStarted));
        assert!(state.embed.loading);
    }

    #[test]
    fn clearing_an_already_clear_loading_flag_is_a_no_op() {
        let mut state = AppState::default();
        assert!(state.dispatch(AppCommand::EmbedLoadingCleared).is_empty());
    }

    #[test]
    fn view_mode_commands_update_and_report() {
        let mut state = AppState::default();
        assert_eq!(state.view_mode, ViewMode::Split);

        let events = state.dispatch(AppCommand::SetViewMode(ViewMode::Reports));
        assert_eq!(events, vec![AppEvent::ViewModeChanged(ViewMode::Reports)]);

        state.dispatch(AppCommand::CycleViewMode);
        assert_eq!(state.view_mode, ViewMode::Split);
    }

    #[test]
    fn menu_cursor_wraps_over_the_master_list() {
        let len = master_list().len();
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenPanelMenu);
        state.dispatch(AppCommand::MoveMenuCursor(-1));
        assert_eq!(state.panels.menu_cursor, len - 1);
        state.dispatch(AppCommand::MoveMenuCursor(1));
        assert_eq!(state.panels.menu_cursor, 0);
    }

    #[test]
    fn status_line_round_trip() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::SetStatus("submitted".to_owned()));
        assert_eq!(events, vec![AppEvent::StatusUpdated("submitted".to_owned())]);
        assert_eq!(state.status_line.as_deref(), Some("submitted"));

        state.dispatch(AppCommand::ClearStatus);
        assert!(state.status_line.is_none());
    }
}
