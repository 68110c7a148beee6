use leptos::prelude::*;

/// Layout state shared by the header and the sidebar.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Layout context, or a fresh one when rendered outside the shell.
pub fn use_layout() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_default()
}
