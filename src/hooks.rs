use crate::flip::{FlipBoard, FlipFrame};
use crate::utils::{normalize_display_value, parse_rate};
use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for the hourly-rate field.
#[derive(Clone)]
pub struct RateInput {
    /// The current text content of the input field.
    pub text: String,
    /// An optional error message if the text is not a valid rate.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event.
    pub on_text_input: Callback<InputEvent>,
}

/// Custom hook for the rate field.
///
/// Every keystroke is parsed right away and forwarded to `on_value`. Text that
/// does not parse is forwarded as a rate of zero and reported in `error`,
/// while the raw text stays in the field so the user can fix it.
#[hook]
pub fn use_rate_input(initial_value: f64, on_value: Callback<f64>) -> RateInput {
    let text_state_handle = use_state(|| initial_value.to_string());
    let error_state_handle = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            match parse_rate(&text) {
                Ok(rate) => {
                    error_setter.set(None);
                    on_value.emit(rate);
                }
                Err(err) => {
                    warn!("rejected hourly rate {:?}: {}", text, err);
                    error_setter.set(Some(err.to_string()));
                    on_value.emit(0.0);
                }
            }
            text_setter.set(text);
        })
    };

    RateInput {
        text: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text_input,
    }
}

/// Drives a [`FlipBoard`] from a numeric value and returns the frame to draw.
///
/// Each value change cancels the timers of the previous change (dropping a
/// `Timeout` clears it) and schedules the new plan. Timers are also dropped
/// when the component unmounts.
#[hook]
pub fn use_flip_board(value: f64) -> FlipFrame {
    let board = use_mut_ref(FlipBoard::new);
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let frame = use_state(FlipFrame::default);

    // Depend on the normalized value so NaN or sub-unit jitter never re-triggers.
    let shown = normalize_display_value(value);
    {
        let board = board.clone();
        let timers = timers.clone();
        let frame = frame.clone();
        use_effect_with(shown, move |&shown| {
            let plan = board.borrow_mut().retarget(shown as f64);
            frame.set(board.borrow().frame());

            let scheduled: Vec<Timeout> = plan
                .steps
                .into_iter()
                .map(|step| {
                    let board = board.clone();
                    let frame = frame.clone();
                    Timeout::new(step.delay_ms, move || {
                        let applied = board.borrow_mut().apply(step.event);
                        if applied {
                            frame.set(board.borrow().frame());
                        }
                    })
                })
                .collect();
            *timers.borrow_mut() = scheduled;

            move || {
                timers.borrow_mut().clear();
            }
        });
    }

    *frame
}
