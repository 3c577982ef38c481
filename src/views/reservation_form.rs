use chrono::NaiveDateTime;

use super::{Route, SubmitOutcome, ViewScope};
use crate::models::{ReservationForm, ReservationId};
use crate::services::api::ReservationsApi;
use crate::services::formatting::format_mobile_number;
use crate::services::validation::validate_reservation_form;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ReservationId),
}

pub struct ReservationFormView {
    scope: ViewScope,
    mode: FormMode,
    pub form: ReservationForm,
    pub errors: Vec<String>,
}

impl ReservationFormView {
    pub fn new(mode: FormMode) -> Self {
        Self {
            scope: ViewScope::new(),
            mode,
            form: ReservationForm::default(),
            errors: Vec::new(),
        }
    }

    pub async fn edit(api: &dyn ReservationsApi, id: ReservationId) -> Self {
        let mut view = Self::new(FormMode::Edit(id));
        view.load(api).await;
        view
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Reservation",
            FormMode::Edit(_) => "Edit Reservation",
        }
    }

    pub async fn load(&mut self, api: &dyn ReservationsApi) {
        let FormMode::Edit(id) = &self.mode else {
            return;
        };

        let token = self.scope.request_token();
        match api.read_reservation(id, &token).await {
            Ok(_) if self.scope.is_unmounted() => {}
            Ok(reservation) => self.form = ReservationForm::from(&reservation),
            Err(e) if e.is_aborted() => {}
            Err(e) => {
                tracing::error!(error = %e, reservation_id = %id, "failed to read reservation");
            }
        }
    }

    pub fn set_form(&mut self, mut form: ReservationForm) {
        form.mobile_number = format_mobile_number(&form.mobile_number);
        self.form = form;
    }

    pub async fn submit(&mut self, api: &dyn ReservationsApi, now: NaiveDateTime) -> SubmitOutcome {
        self.errors.clear();

        let draft = match validate_reservation_form(&self.form, now) {
            Ok(draft) => draft,
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        let token = self.scope.request_token();
        let result = match &self.mode {
            FormMode::Create => api.create_reservation(&draft, &token).await,
            FormMode::Edit(id) => api.update_reservation(id, &draft, &token).await,
        };

        match result {
            Ok(_) if self.scope.is_unmounted() => SubmitOutcome::Aborted,
            Ok(_) => SubmitOutcome::Navigate(Route::Dashboard {
                date: Some(draft.reservation_date),
            }),
            Err(e) if e.is_aborted() => SubmitOutcome::Aborted,
            Err(e) => {
                tracing::error!(error = %e, "failed to save reservation");
                self.errors.push(e.to_string());
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}
