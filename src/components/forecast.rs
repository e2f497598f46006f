use crate::models::aurora::{AuroraReport, ForecastRecord, activity_css_class};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForecastPanelProps {
    pub report: Rc<AuroraReport>,
}

#[function_component(ForecastPanel)]
pub fn forecast_panel(props: &ForecastPanelProps) -> Html {
    html! {
        <div class="record-list">
            { format_forecast_data(props.report.forecast.as_deref()) }
        </div>
    }
}

/// Renders forecast records in input order, or a fixed notice when the
/// endpoint answered `null` or an empty array.
pub fn format_forecast_data(records: Option<&[ForecastRecord]>) -> Html {
    match records {
        None | Some([]) => html! {
            <p class="empty-notice">{"No forecast data available."}</p>
        },
        Some(records) => records.iter().map(format_forecast_entry).collect(),
    }
}

fn format_forecast_entry(record: &ForecastRecord) -> Html {
    html! {
        <div class="record-card">
            <p><span class="record-label">{"Time: "}</span>{&record.time}</p>
            <p><span class="record-label">{"Visibility: "}</span>{record.visibility.to_string()}</p>
            <p>
                <span class="record-label">{"Activity Level: "}</span>
                <span class={classes!("activity-badge", activity_css_class(&record.activity_level))}>
                    {&record.activity_level}
                </span>
            </p>
        </div>
    }
}
