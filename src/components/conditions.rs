use crate::models::aurora::{AuroraReport, CurrentConditions};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConditionsPanelProps {
    pub report: Rc<AuroraReport>,
}

#[function_component(ConditionsPanel)]
pub fn conditions_panel(props: &ConditionsPanelProps) -> Html {
    format_weather_data(props.report.current.as_ref())
}

/// Renders current ground conditions, or a fixed notice when the endpoint
/// answered `null`. Values are shown verbatim, no rounding or conversion.
pub fn format_weather_data(conditions: Option<&CurrentConditions>) -> Html {
    match conditions {
        None => html! {
            <p class="empty-notice">{"Weather data unavailable."}</p>
        },
        Some(conditions) => html! {
            <div class="conditions-grid">
                <div class="conditions-item">
                    <h3>{"Temperature"}</h3>
                    <p class="conditions-value">{format!("{} °C", conditions.temperature)}</p>
                </div>
                <div class="conditions-item">
                    <h3>{"Cloud Coverage"}</h3>
                    <p class="conditions-value">{format!("{}%", conditions.cloud_coverage)}</p>
                </div>
                <div class="conditions-item">
                    <h3>{"Wind Speed"}</h3>
                    <p class="conditions-value">{format!("{} km/h", conditions.wind_speed)}</p>
                </div>
            </div>
        },
    }
}
