//! Main module for the time value calculator using Yew.
//! Wires the questionnaire reducer, input hooks and view components.

use time_value_roi::{
    components::{QuestionStep, RateField, StepNav, SummaryPanel},
    config::{DEFAULT_HOURLY_RATE, QUESTIONS},
    hooks::use_rate_input,
    CalculatorAction, Questionnaire,
};
use yew::prelude::*;

/// Primary calculator component: question panel on the left, summary on the right.
#[function_component(TimeValueCalculator)]
fn time_value_calculator() -> Html {
    let state = use_reducer(Questionnaire::new);

    let on_hours = {
        let state = state.clone();
        Callback::from(move |hours: u32| state.dispatch(CalculatorAction::SetHours(hours)))
    };
    let on_rate = {
        let state = state.clone();
        Callback::from(move |rate: f64| state.dispatch(CalculatorAction::SetHourlyRate(rate)))
    };
    let on_back = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CalculatorAction::Retreat))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CalculatorAction::Advance))
    };

    let rate = use_rate_input(DEFAULT_HOURLY_RATE, on_rate);

    let step = state.current_step();
    let derived = state.derived();

    html! {
        <div class="calculator">
            <div class="question-panel">
                <h1>{ "How much is your time worth to you?" }</h1>
                <QuestionStep
                    step={step}
                    question={QUESTIONS[step]}
                    hours={state.hours_for_current_step()}
                    on_hours={on_hours}
                />
                <RateField text={rate.text.clone()} error={rate.error.clone()} oninput={rate.on_text_input.clone()} />
                <StepNav
                    show_back={step > 0}
                    is_last_step={state.is_last_step()}
                    completed={state.is_completed()}
                    on_back={on_back}
                    on_next={on_next}
                />
            </div>
            <SummaryPanel derived={derived} />
        </div>
    }
}

/// Entry point: initializes Yew renderer for the calculator.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<TimeValueCalculator>::new().render();
}
