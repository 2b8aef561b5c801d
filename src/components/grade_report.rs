//! Grade Report Panel
//!
//! Classes the fixed roster by threshold and shows the class average.

use leptos::prelude::*;

use crate::tables::{GradeReport, ROSTER};

#[component]
pub fn GradeReportPanel() -> impl IntoView {
    let (report, set_report) = signal::<Option<GradeReport>>(None);

    let process = move |_| {
        let built = GradeReport::build(&ROSTER);
        log::debug!("[GRADES] {} students, average {}", built.lines.len(), built.average_label());
        set_report.set(Some(built));
    };

    view! {
        <div class="demo-card">
            <h3>"Student Grades"</h3>
            <button on:click=process>"Process Grades"</button>
            <div id="gradesResult" class="result">
                {move || report.get().map(|r| {
                    let average = r.average_label();
                    view! {
                        <h4>"Student Grade Analysis"</h4>
                        <ul>
                            {r.lines.into_iter().map(|line| view! {
                                <li class=line.band.class()>
                                    {line.student.name} ": " {line.student.grade} "%"
                                </li>
                            }).collect_view()}
                        </ul>
                        <strong>"Class Average: " {average} "%"</strong>
                    }
                })}
            </div>
        </div>
    }
}
