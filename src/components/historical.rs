use crate::models::aurora::{AuroraReport, HistoricalRecord, activity_css_class};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HistoricalPanelProps {
    pub report: Rc<AuroraReport>,
}

#[function_component(HistoricalPanel)]
pub fn historical_panel(props: &HistoricalPanelProps) -> Html {
    html! {
        <div class="record-list">
            { format_historical_data(props.report.historical.as_deref()) }
        </div>
    }
}

/// Renders historical visibility records in input order, or a fixed
/// notice when the endpoint answered `null` or an empty array.
pub fn format_historical_data(records: Option<&[HistoricalRecord]>) -> Html {
    match records {
        None | Some([]) => html! {
            <p class="empty-notice">{"No historical data available."}</p>
        },
        Some(records) => records.iter().map(format_historical_entry).collect(),
    }
}

fn format_historical_entry(record: &HistoricalRecord) -> Html {
    html! {
        <div class="record-card">
            <p><span class="record-label">{"Date: "}</span>{&record.date}</p>
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
