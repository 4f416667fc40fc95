//! Yew view components for the ROI calculator.
//!
//! Apart from [`FlipDisplay`], which owns its animation timers through
//! [`use_flip_board`], these components only render props.

use crate::calculator::Derived;
use crate::config::{Question, ANIMATION_DURATION_MS, MAX_HOURS_PER_WEEK, QUESTION_COUNT};
use crate::flip::{grouped_glyphs, Glyph};
use crate::hooks::use_flip_board;
use crate::utils::{format_currency, format_number, validate_hours};
use log::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FlipDisplayProps {
    pub value: f64,
}

/// Split-flap rendering of `value`: `$` then 7 digit cells with separators.
#[function_component(FlipDisplay)]
pub fn flip_display(props: &FlipDisplayProps) -> Html {
    let frame = use_flip_board(props.value);

    html! {
        <div class="flip-display">
            <span class="flip-currency">{ "$" }</span>
            { grouped_glyphs(&frame.digits).into_iter().enumerate().map(|(i, glyph)| match glyph {
                Glyph::Digit { position, digit } => html! {
                    <DigitCell key={glyph.key(i)} digit={digit} flipping={frame.is_flipping(position)} />
                },
                Glyph::Separator => html! {
                    <span key={glyph.key(i)} class="flip-separator">{ "," }</span>
                },
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DigitCellProps {
    pub digit: u8,
    pub flipping: bool,
}

/// One digit with two rotating layers. While flipping the top half turns to
/// -90deg and the bottom half comes in from 90deg.
#[function_component(DigitCell)]
pub fn digit_cell(props: &DigitCellProps) -> Html {
    let (top, bottom) = if props.flipping { (-90, 0) } else { (0, 90) };
    let layer_style = |angle: i32| {
        format!(
            "backface-visibility: hidden; transform-style: preserve-3d; \
             transform: rotateX({}deg); transition: transform {}ms ease-in-out;",
            angle, ANIMATION_DURATION_MS
        )
    };

    html! {
        <div class="flip-cell">
            <div class={classes!("flip-layer", "flip-top", props.flipping.then_some("flipping"))}
                 style={layer_style(top)}>
                { props.digit.to_string() }
            </div>
            <div class={classes!("flip-layer", "flip-bottom", props.flipping.then_some("flipping"))}
                 style={layer_style(bottom)}>
                { props.digit.to_string() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuestionStepProps {
    pub step: usize,
    pub question: Question,
    pub hours: u32,
    pub on_hours: Callback<u32>,
}

/// Title, description and the hours-per-week slider for the current question.
#[function_component(QuestionStep)]
pub fn question_step(props: &QuestionStepProps) -> Html {
    let oninput = {
        let on_hours = props.on_hours.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match validate_hours(&input.value()) {
                Ok(hours) => on_hours.emit(hours),
                Err(err) => warn!("ignoring slider value: {}", err),
            }
        })
    };

    html! {
        <div class="question-step">
            <div class="step-indicator">
                <span>{ format!("Question {} of {}", props.step + 1, QUESTION_COUNT) }</span>
                <span class="step-dots">
                    { (0..QUESTION_COUNT).map(|i| html! {
                        <span class={classes!("step-dot", (i <= props.step).then_some("active"))}></span>
                    }).collect::<Html>() }
                </span>
            </div>
            <h2 class="question-title">{ props.question.title }</h2>
            <p class="question-description">{ props.question.description }</p>
            <div class="form-group">
                <label for="hours">{ "Hours spent per week on this task" }</label>
                <div class="slider-with-value">
                    <input type="range"
                        id="hours"
                        min="0"
                        max={MAX_HOURS_PER_WEEK.to_string()}
                        step="1"
                        value={props.hours.to_string()}
                        oninput={oninput}
                    />
                    <span class="slider-value">{ format!("{} hours", props.hours) }</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RateFieldProps {
    pub text: String,
    pub error: Option<String>,
    pub oninput: Callback<InputEvent>,
}

#[function_component(RateField)]
pub fn rate_field(props: &RateFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for="hourly-rate">{ "How much 1 hour of your time is worth to you" }</label>
            <input type="text"
                id="hourly-rate"
                inputmode="decimal"
                value={props.text.clone()}
                class={if props.error.is_some() { "invalid" } else { "" }}
                placeholder="Enter hourly rate"
                oninput={props.oninput.clone()}
            />
            if let Some(ref err) = props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepNavProps {
    pub show_back: bool,
    pub is_last_step: bool,
    pub completed: bool,
    pub on_back: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

/// Back / Next buttons. The forward button reads Next, Complete or Completed.
#[function_component(StepNav)]
pub fn step_nav(props: &StepNavProps) -> Html {
    let label = match (props.completed, props.is_last_step) {
        (true, _) => "✓ Completed",
        (false, true) => "Complete →",
        (false, false) => "Next →",
    };

    html! {
        <div class="step-nav">
            if props.show_back {
                <button class="btn-secondary" onclick={props.on_back.clone()}>{ "← Back" }</button>
            }
            <button class={classes!("btn-primary", props.completed.then_some("completed"))}
                    onclick={props.on_next.clone()}>
                { label }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub derived: Derived,
}

/// Right-hand panel: flip display, call to action and the breakdown.
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let d = props.derived;
    let hours = format_number(d.monthly_hours);

    html! {
        <div class="summary-panel">
            <h2>{ "Return on investment per month with SnapHomz" }</h2>
            <FlipDisplay value={d.monthly_value} />
            <p class="summary-hours">{ format!("Or {} hours of your life", hours) }</p>
            <button class="btn-primary wide">{ "Start your free trial" }</button>
            <div class="breakdown">
                <h3>{ "How did we get this number?" }</h3>
                { breakdown_row("Hours saved per month", format!("{} hours", hours), false) }
                { breakdown_row(
                    &format!("Value of SnapHomz for saving {} hours of your time", hours),
                    format_currency(d.time_value),
                    false,
                ) }
                { breakdown_row(
                    "Cost of SnapHomz subscription per month",
                    format_currency(d.subscription_cost),
                    false,
                ) }
                { breakdown_row("Total ROI per month", format_currency(d.monthly_value), true) }
            </div>
        </div>
    }
}

fn breakdown_row(label: &str, value: String, total: bool) -> Html {
    html! {
        <div class={classes!("breakdown-row", total.then_some("total"))}>
            <span>{ label.to_string() }</span>
            <span>{ value }</span>
        </div>
    }
}
