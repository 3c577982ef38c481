use super::{Route, SubmitOutcome, ViewScope};
use crate::models::TableForm;
use crate::services::api::ReservationsApi;
use crate::services::validation::validate_table_form;

pub struct TableFormView {
    scope: ViewScope,
    pub form: TableForm,
    pub errors: Vec<String>,
}

impl Default for TableFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormView {
    pub fn new() -> Self {
        Self {
            scope: ViewScope::new(),
            form: TableForm::default(),
            errors: Vec::new(),
        }
    }

    pub async fn submit(&mut self, api: &dyn ReservationsApi) -> SubmitOutcome {
        self.errors.clear();

        let draft = match validate_table_form(&self.form) {
            Ok(draft) => draft,
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        let token = self.scope.request_token();
        match api.create_table(&draft, &token).await {
            Ok(_) if self.scope.is_unmounted() => SubmitOutcome::Aborted,
            Ok(table) => {
                tracing::info!(table_id = %table.table_id, table_name = %table.table_name, "table created");
                SubmitOutcome::Navigate(Route::Dashboard { date: None })
            }
            Err(e) if e.is_aborted() => SubmitOutcome::Aborted,
            Err(e) => {
                tracing::error!(error = %e, "failed to create table");
                self.errors.push(e.to_string());
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}
