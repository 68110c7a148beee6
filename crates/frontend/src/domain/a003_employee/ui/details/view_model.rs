use contracts::domain::a003_employee::aggregate::{Employee, EmployeeDto};
use contracts::system::session::SessionContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_employee::api;

/// ViewModel for the employee form
#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl EmployeeDetailsViewModel {
    /// Empty form for a new employee, or a copy of `existing` to edit.
    pub fn new(existing: Option<&Employee>) -> Self {
        let dto = existing.map(EmployeeDto::from_employee).unwrap_or_default();
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    /// Validates, stamps the author and posts the form
    pub fn save_command(&self, session: &SessionContext, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();
        current.author = session.stamp();
        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::save_employee(&current).await {
                Ok(()) => {
                    log::info!("employee '{}' saved", current.name);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(format!("Failed to save: {}", e))),
            }
            saving.try_set(false);
        });
    }
}
