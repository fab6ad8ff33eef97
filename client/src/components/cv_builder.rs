//! Read-only CV view for the job seeker dashboard.

use leptos::prelude::*;
use portal::cv::Cv;

/// Renders the demo CV with its completion bar. The Preview and Download
/// buttons are placeholders.
#[component]
pub fn CvBuilder() -> impl IntoView {
    let cv = Cv::sample();
    let percent = cv.completion_percent();

    view! {
        <div class="cv-builder">
            <div class="cv-builder__header">
                <div class="cv-builder__progress-track">
                    <div class="cv-builder__progress" style:width=format!("{percent}%")></div>
                </div>
                <span>{format!("{percent}% Completed")}</span>
                <div class="cv-builder__actions">
                    <button class="btn">"Preview CV"</button>
                    <button class="btn btn--accent">"Download CV"</button>
                </div>
            </div>
            <div class="cv-builder__content">
                <h2>{cv.name}</h2>
                <p>{cv.contact_line()}</p>
                <p>{cv.residence_line()}</p>

                <div class="cv-builder__section">
                    <h3 class="cv-builder__section-title">"Education"</h3>
                    {cv
                        .education
                        .iter()
                        .map(|edu| {
                            view! {
                                <div>
                                    <h4>{edu.institution}</h4>
                                    <p>{edu.degree}</p>
                                    <p>{edu.years}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="cv-builder__section">
                    <h3 class="cv-builder__section-title">"Work Experience"</h3>
                    {cv
                        .work_experience
                        .iter()
                        .map(|exp| {
                            view! {
                                <div>
                                    <h4>{exp.position}</h4>
                                    <p>{exp.company}</p>
                                    <p>{exp.start_date}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
