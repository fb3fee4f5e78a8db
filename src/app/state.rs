use crossbeam_channel::{Receiver, Sender};

use crate::config::FormDefaults;
use crate::types::{PredictionResult, PredictionTask, SensorReading};

/// Fixed user-facing message for any failed prediction request. The
/// underlying cause is logged, never displayed.
pub const FAILURE_MESSAGE: &str = "Failed to get prediction. Please try again.";

/// One editable numeric field: the raw text in the input box, the last
/// accepted value and whether the current text parses.
///
/// A text that fails to parse never reaches the reading; the previous
/// accepted value is kept and the field is flagged invalid instead.
#[derive(Debug, Clone)]
pub struct FieldInput {
    buffer: String,
    value: f64,
    valid: bool,
}

impl FieldInput {
    pub fn new(value: f64) -> Self {
        Self {
            buffer: format!("{}", value),
            value,
            valid: true,
        }
    }

    /// Raw text buffer, edited in place by the input widget.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Re-parse the buffer after an edit.
    pub fn reparse(&mut self) {
        match self.buffer.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => {
                self.value = parsed;
                self.valid = true;
            }
            _ => {
                self.valid = false;
            }
        }
    }

    /// Replace the buffer and re-parse, as a user edit would.
    pub fn set_text(&mut self, raw: &str) {
        self.buffer = raw.to_string();
        self.reparse();
    }

    /// Last accepted numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// The five form fields bound to the prediction request body.
#[derive(Debug, Clone)]
pub struct FormInputs {
    pub ax_g: FieldInput,
    pub ay_g: FieldInput,
    pub az_g: FieldInput,
    pub vibration: FieldInput,
    pub bending: FieldInput,
}

impl FormInputs {
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            ax_g: FieldInput::new(defaults.ax_g),
            ay_g: FieldInput::new(defaults.ay_g),
            az_g: FieldInput::new(defaults.az_g),
            vibration: FieldInput::new(defaults.vibration),
            bending: FieldInput::new(defaults.bending),
        }
    }

    /// Labeled fields in form order, with the input hint shown for each.
    pub fn fields_mut(&mut self) -> [(&'static str, &'static str, &mut FieldInput); 5] {
        [
            ("Ax_g", "e.g. 0.45", &mut self.ax_g),
            ("Ay_g", "e.g. 0.6", &mut self.ay_g),
            ("Az_g", "e.g. 0.9", &mut self.az_g),
            ("Vibration", "e.g. 300", &mut self.vibration),
            ("Bending", "e.g. 100", &mut self.bending),
        ]
    }

    pub fn all_valid(&self) -> bool {
        self.ax_g.is_valid()
            && self.ay_g.is_valid()
            && self.az_g.is_valid()
            && self.vibration.is_valid()
            && self.bending.is_valid()
    }

    /// Snapshot of the last accepted value of every field.
    pub fn reading(&self) -> SensorReading {
        SensorReading::new(
            self.ax_g.value(),
            self.ay_g.value(),
            self.az_g.value(),
            self.vibration.value(),
            self.bending.value(),
        )
    }
}

/// What the UI currently shows for the prediction request. Exactly one
/// variant holds at any time, so loading and a stale result can never be
/// displayed together.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

impl Outcome {
    pub fn is_loading(&self) -> bool {
        matches!(self, Outcome::Loading)
    }

    /// Label of the submit control: `Predicting...` while the request is in
    /// flight, `Predict` before and after.
    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Predicting..."
        } else {
            "Predict"
        }
    }

    /// Map a worker result to the displayed outcome. Success embeds the
    /// returned status; every failure collapses to the one fixed message.
    pub fn from_result(result: &PredictionResult) -> Self {
        match &result.status {
            Some(status) => Outcome::Succeeded(format!("Prediction: {}", status)),
            None => Outcome::Failed(FAILURE_MESSAGE.to_string()),
        }
    }
}

/// Application state: the form, the displayed outcome and the channel
/// endpoints shared with the prediction worker thread.
pub struct AppState {
    pub form: FormInputs,
    pub outcome: Outcome,
    pub task_sender: Sender<PredictionTask>,
    pub result_receiver: Receiver<PredictionResult>,
}

impl AppState {
    pub fn new(
        defaults: &FormDefaults,
        task_sender: Sender<PredictionTask>,
        result_receiver: Receiver<PredictionResult>,
    ) -> Self {
        Self {
            form: FormInputs::from_defaults(defaults),
            outcome: Outcome::Idle,
            task_sender,
            result_receiver,
        }
    }

    /// Whether the submit control accepts a click: not while a request is in
    /// flight, not while any field fails to parse.
    pub fn submit_enabled(&self) -> bool {
        !self.outcome.is_loading() && self.form.all_valid()
    }

    /// In-flight guard. Returns the reading to submit and flips the outcome
    /// to `Loading`, or `None` while a request is already running or any
    /// field does not parse. Button and keyboard submits both go through
    /// here, so neither can start a second concurrent request.
    pub fn begin_submission(&mut self) -> Option<SensorReading> {
        if self.outcome.is_loading() || !self.form.all_valid() {
            return None;
        }

        let reading = self.form.reading();
        self.outcome = Outcome::Loading;
        Some(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppState, FieldInput, FormInputs, Outcome, FAILURE_MESSAGE};
    use crate::config::FormDefaults;
    use crate::types::{PredictionResult, SensorReading};

    use crossbeam_channel::bounded;

    fn test_state() -> (
        AppState,
        crossbeam_channel::Receiver<crate::types::PredictionTask>,
        crossbeam_channel::Sender<PredictionResult>,
    ) {
        let (task_sender, task_receiver) = bounded(1);
        let (result_sender, result_receiver) = bounded(1);
        let state = AppState::new(&FormDefaults::default(), task_sender, result_receiver);
        (state, task_receiver, result_sender)
    }

    #[test]
    fn editing_one_field_leaves_the_other_four_unchanged() {
        let mut form = FormInputs::from_defaults(&FormDefaults::default());
        form.vibration.set_text("450");

        assert_eq!(
            form.reading(),
            SensorReading::new(0.45, 0.6, 0.9, 450.0, 100.0)
        );
    }

    #[test]
    fn unparseable_edit_keeps_previous_value_and_marks_invalid() {
        let mut field = FieldInput::new(300.0);
        field.set_text("");

        assert!(!field.is_valid());
        assert_eq!(field.value(), 300.0);

        field.set_text("not a number");
        assert!(!field.is_valid());
        assert_eq!(field.value(), 300.0);

        field.set_text("451.5");
        assert!(field.is_valid());
        assert_eq!(field.value(), 451.5);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut field = FieldInput::new(1.0);
        field.set_text("NaN");
        assert!(!field.is_valid());
        assert_eq!(field.value(), 1.0);

        field.set_text("inf");
        assert!(!field.is_valid());
        assert_eq!(field.value(), 1.0);
    }

    #[test]
    fn begin_submission_snapshots_reading_and_sets_loading() {
        let (mut state, _task_rx, _result_tx) = test_state();

        let reading = state.begin_submission().expect("submission allowed");
        assert_eq!(reading, SensorReading::new(0.45, 0.6, 0.9, 300.0, 100.0));
        assert!(state.outcome.is_loading());

        // Submitting never mutates the field values.
        assert_eq!(
            state.form.reading(),
            SensorReading::new(0.45, 0.6, 0.9, 300.0, 100.0)
        );
    }

    #[test]
    fn begin_submission_refuses_while_loading() {
        let (mut state, _task_rx, _result_tx) = test_state();

        assert!(state.begin_submission().is_some());
        assert!(state.begin_submission().is_none());
        assert!(state.outcome.is_loading());
    }

    #[test]
    fn begin_submission_refuses_invalid_fields() {
        let (mut state, _task_rx, _result_tx) = test_state();
        state.form.bending.set_text("");

        assert!(state.begin_submission().is_none());
        assert_eq!(state.outcome, Outcome::Idle);
    }

    #[test]
    fn submit_label_reads_predicting_only_while_in_flight() {
        assert_eq!(Outcome::Idle.submit_label(), "Predict");
        assert_eq!(Outcome::Loading.submit_label(), "Predicting...");
        assert_eq!(
            Outcome::Succeeded("Prediction: stable".to_string()).submit_label(),
            "Predict"
        );
        assert_eq!(
            Outcome::Failed(FAILURE_MESSAGE.to_string()).submit_label(),
            "Predict"
        );
    }

    #[test]
    fn submit_control_is_disabled_while_in_flight_or_invalid() {
        let (mut state, _task_rx, _result_tx) = test_state();
        assert!(state.submit_enabled());

        state.begin_submission().expect("submission allowed");
        assert!(!state.submit_enabled());

        let (mut state, _task_rx, _result_tx) = test_state();
        state.form.ax_g.set_text("");
        assert!(!state.submit_enabled());

        state.form.ax_g.set_text("0.5");
        assert!(state.submit_enabled());
    }

    #[test]
    fn success_result_renders_templated_message() {
        let outcome = Outcome::from_result(&PredictionResult::success("stable".to_string()));
        assert_eq!(outcome, Outcome::Succeeded("Prediction: stable".to_string()));
    }

    #[test]
    fn any_failure_renders_the_fixed_message() {
        for cause in ["connection refused", "500 Internal Server Error", "decode"] {
            let outcome = Outcome::from_result(&PredictionResult::error(cause.to_string()));
            assert_eq!(outcome, Outcome::Failed(FAILURE_MESSAGE.to_string()));
        }
    }
}
