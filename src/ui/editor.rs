//! Employee editor: the grid plus at most one open form.
//!
//! Drives the browse/edit cycle against an [`EmployeeService`]. A failed save
//! leaves the form open with the user's input intact.

use std::sync::Arc;

use crate::config::SAVE_ERROR_PREFIX;
use crate::domain::{Employee, FieldErrors};
use crate::errors::AppError;
use crate::services::EmployeeService;

use super::form::{EmployeeForm, FormField, SaveRequest};
use super::grid::prepare_rows;

/// Result of pressing "Save"
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Stored; the form is closed and the grid reloaded
    Saved,
    /// Client-side validation failed; nothing was sent
    Invalid(FieldErrors),
    /// The service rejected the save; carries the alert text
    Failed(String),
    /// No form is open
    NotEditing,
}

pub struct EmployeeEditor {
    service: Arc<dyn EmployeeService>,
    rows: Vec<Employee>,
    form: Option<EmployeeForm>,
    alert: Option<String>,
}

impl EmployeeEditor {
    pub fn new(service: Arc<dyn EmployeeService>) -> Self {
        Self {
            service,
            rows: Vec::new(),
            form: None,
            alert: None,
        }
    }

    /// Reload the grid. On failure the error is logged and the current rows stay.
    pub async fn refresh(&mut self) {
        match self.service.list_employees().await {
            Ok(records) => self.rows = prepare_rows(records),
            Err(e) => tracing::error!(error = %e, "Failed to load employees"),
        }
    }

    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    pub fn form(&self) -> Option<&EmployeeForm> {
        self.form.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_some()
    }

    /// Message from the last failed save
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Open a blank form, discarding any open draft.
    pub fn add_new(&mut self) {
        self.form = Some(EmployeeForm::new_draft());
        self.alert = None;
    }

    /// Open the form for a grid row. Returns false for an out-of-range index.
    pub fn select_row(&mut self, index: usize) -> bool {
        let Some(row) = self.rows.get(index) else {
            return false;
        };

        self.form = Some(EmployeeForm::edit(row));
        self.alert = None;
        true
    }

    /// Forward an input change to the open form.
    pub fn change(&mut self, field: FormField, value: &str) {
        if let Some(form) = self.form.as_mut() {
            form.change(field, value);
        }
    }

    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Validate, then create or update through the service.
    pub async fn save(&mut self) -> SaveOutcome {
        let Some(form) = self.form.as_mut() else {
            return SaveOutcome::NotEditing;
        };

        let request = match form.submit() {
            Ok(request) => request,
            Err(errors) => return SaveOutcome::Invalid(errors),
        };

        let result = match request {
            SaveRequest::Create(employee) => {
                self.service.create_employee(employee).await.map(|_| ())
            }
            SaveRequest::Update { id, employee } => {
                self.service.update_employee(id, employee).await.map(|_| ())
            }
        };

        match result {
            Ok(()) => {
                self.form = None;
                self.alert = None;
                self.refresh().await;
                SaveOutcome::Saved
            }
            Err(e) => {
                let message = save_alert(e);
                self.alert = Some(message.clone());
                SaveOutcome::Failed(message)
            }
        }
    }
}

fn save_alert(error: AppError) -> String {
    tracing::error!(error = %error, "{}", SAVE_ERROR_PREFIX);
    format!("{}: {}", SAVE_ERROR_PREFIX, error.into_body().error)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use mockall::predicate::eq;
    use sea_orm::DbErr;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;
    use crate::domain::Salary;
    use crate::services::MockEmployeeService;

    /// Counts error-level events
    struct ErrorEvents(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorEvents {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn stored(id: i32) -> Employee {
        Employee {
            id: Some(id),
            firstname: "Lena".to_string(),
            surname: "Park".to_string(),
            fullname: "Lena Park".to_string(),
            salutation: "Ms.".to_string(),
            gender: "Female".to_string(),
            employeenumber: "2001".to_string(),
            profile_color: "Red".to_string(),
            salary: Some(Salary::Amount(61000.0)),
        }
    }

    fn fill(editor: &mut EmployeeEditor) {
        editor.change(FormField::Firstname, "Jane");
        editor.change(FormField::Surname, "Doe");
        editor.change(FormField::Salutation, "Ms.");
        editor.change(FormField::EmployeeNumber, "10042");
        editor.change(FormField::Salary, "52000");
        editor.change(FormField::ProfileColor, "green");
    }

    #[tokio::test]
    async fn test_refresh_formats_salaries() {
        let mut service = MockEmployeeService::new();
        service
            .expect_list_employees()
            .returning(|| Ok(vec![stored(1)]));

        let mut editor = EmployeeEditor::new(Arc::new(service));
        editor.refresh().await;

        assert_eq!(editor.rows().len(), 1);
        assert_eq!(editor.rows()[0].salary, Some(Salary::Text("61 000".to_string())));
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_rows() {
        let mut service = MockEmployeeService::new();
        let mut calls = 0;
        service.expect_list_employees().returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![stored(1)])
            } else {
                Err(AppError::Store(DbErr::Custom("gone".into())))
            }
        });

        let mut editor = EmployeeEditor::new(Arc::new(service));
        editor.refresh().await;
        editor.refresh().await;

        assert_eq!(editor.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_add_new_then_save_creates_and_closes_form() {
        let mut service = MockEmployeeService::new();
        service
            .expect_create_employee()
            .withf(|e| {
                e.fullname == "Jane Doe"
                    && e.gender == "Female"
                    && e.profile_color == "Green"
                    && e.salary == Some(Salary::Amount(52000.0))
            })
            .times(1)
            .returning(|_| Ok(1));
        service
            .expect_list_employees()
            .times(1)
            .returning(|| Ok(vec![stored(1)]));

        let mut editor = EmployeeEditor::new(Arc::new(service));
        editor.add_new();
        fill(&mut editor);

        let outcome = editor.save().await;

        assert_eq!(outcome, SaveOutcome::Saved);
        assert!(!editor.is_editing());
        assert_eq!(editor.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_form_is_never_sent() {
        let mut service = MockEmployeeService::new();
        service.expect_create_employee().never();
        service.expect_update_employee().never();

        let mut editor = EmployeeEditor::new(Arc::new(service));
        editor.add_new();

        let SaveOutcome::Invalid(errors) = editor.save().await else {
            panic!("expected validation failure");
        };

        assert_eq!(errors.len(), 8);
        assert!(editor.is_editing());
        assert!(editor.form().is_some_and(|f| f.has_error("surname")));
    }

    #[tokio::test]
    async fn test_selected_row_saves_as_update() {
        let mut service = MockEmployeeService::new();
        service
            .expect_list_employees()
            .returning(|| Ok(vec![stored(4)]));
        service
            .expect_update_employee()
            .with(eq(4), mockall::predicate::always())
            .times(1)
            .returning(|_, e| Ok(e));
        service.expect_create_employee().never();

        let mut editor = EmployeeEditor::new(Arc::new(service));
        editor.refresh().await;

        assert!(editor.select_row(0));
        assert_eq!(editor.form().map(|f| f.salary_text()), Some("61 000"));

        editor.change(FormField::Salary, "61 0005");
        assert_eq!(editor.save().await, SaveOutcome::Saved);
    }

    #[tokio::test]
    async fn test_select_row_out_of_range() {
        let service = MockEmployeeService::new();
        let mut editor = EmployeeEditor::new(Arc::new(service));

        assert!(!editor.select_row(3));
        assert!(!editor.is_editing());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_form_and_alerts() {
        let mut service = MockEmployeeService::new();
        service
            .expect_create_employee()
            .returning(|_| Err(AppError::Store(DbErr::Custom("Duplicate entry".into()))));
        service.expect_list_employees().never();

        let mut editor = EmployeeEditor::new(Arc::new(service));
        editor.add_new();
        fill(&mut editor);

        let outcome = editor.save().await;

        let expected = format!(
            "Error saving employee: {}",
            DbErr::Custom("Duplicate entry".into())
        );
        assert_eq!(outcome, SaveOutcome::Failed(expected.clone()));
        assert_eq!(editor.alert(), Some(expected.as_str()));
        assert!(editor.is_editing());
        assert_eq!(editor.form().map(|f| f.draft().firstname.as_str()), Some("Jane"));
    }

    #[tokio::test]
    async fn test_failed_save_is_logged_once() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorEvents(errors.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut service = MockEmployeeService::new();
        service
            .expect_create_employee()
            .returning(|_| Err(AppError::Store(DbErr::Custom("deadlock".into()))));

        let mut editor = EmployeeEditor::new(Arc::new(service));
        editor.add_new();
        fill(&mut editor);
        editor.save().await;

        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_discards_draft() {
        let mut service = MockEmployeeService::new();
        service.expect_create_employee().never();

        let mut editor = EmployeeEditor::new(Arc::new(service));
        editor.add_new();
        editor.change(FormField::Firstname, "Draft");
        editor.cancel();

        assert!(!editor.is_editing());
        assert_eq!(editor.save().await, SaveOutcome::NotEditing);

        editor.add_new();
        assert_eq!(editor.form().map(|f| f.draft().firstname.as_str()), Some(""));
    }

    #[tokio::test]
    async fn test_save_without_form() {
        let service = MockEmployeeService::new();
        let mut editor = EmployeeEditor::new(Arc::new(service));

        assert_eq!(editor.save().await, SaveOutcome::NotEditing);
    }
}
