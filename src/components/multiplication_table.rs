use leptos::prelude::*;

use crate::config::DemoConfig;
use crate::tables::{MultiplicationTable, HEADER_BACKGROUND};

fn header_style() -> String {
    format!("font-weight: bold; background: {}; color: white; padding: 0.5rem;", HEADER_BACKGROUND)
}

/// Nested-loop multiplication grid with parity shading
#[component]
pub fn MultiplicationTablePanel() -> impl IntoView {
    let size = expect_context::<DemoConfig>().table_size;
    let (table, set_table) = signal::<Option<MultiplicationTable>>(None);

    let generate = move |_| {
        log::debug!("[TABLE] generating {}x{}", size, size);
        set_table.set(Some(MultiplicationTable::generate(size)));
    };

    view! {
        <div class="demo-card">
            <h3>"Multiplication Table"</h3>
            <button on:click=generate>"Generate Table"</button>
            <div id="multiplicationTable" class="result">
                {move || table.get().map(|t| {
                    let title = t.title();
                    let columns = t.columns();
                    let size = t.size;
                    let rows = t.rows;
                    view! {
                        <h4>{title}</h4>
                        <div style={format!(
                            "display: grid; grid-template-columns: repeat({}, 1fr); gap: 5px; text-align: center;",
                            columns,
                        )}>
                            <div style={header_style()}>"×"</div>
                            {(1..=size).map(|i| view! { <div style={header_style()}>{i}</div> }).collect_view()}
                            {rows.into_iter().enumerate().map(|(i, row)| view! {
                                <div style={header_style()}>{i + 1}</div>
                                {row.into_iter().map(|cell| view! {
                                    <div style={format!("background: {}; padding: 0.5rem;", cell.background())}>
                                        {cell.product}
                                    </div>
                                }).collect_view()}
                            }).collect_view()}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
