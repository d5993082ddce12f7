use std::collections::BTreeMap;

use leptos::prelude::*;
use shared_types::Program;

use crate::components::LoadingView;
use crate::server::{get_active_period, get_programs};

#[component]
pub fn HomePage() -> impl IntoView {
    let landing_resource = Resource::new(
        || (),
        |_| async move {
            let period = get_active_period().await.ok();
            let programs = get_programs().await.unwrap_or_default();
            (period, programs)
        },
    );

    view! {
        <div class="home-page">
            <div class="home-hero">
                <h1>"Postgraduate Admission"</h1>
                <p class="home-hero-subtitle">
                    "Apply to a graduate program, upload your documents and schedule your admission interview."
                </p>
            </div>

            <Suspense fallback=move || view! { <LoadingView message=None/> }>
                {move || {
                    landing_resource.get().map(|(period, programs)| {
                        view! {
                            <div class="home-content">
                                {period.map(|active| view! {
                                    <p class="home-period-banner">
                                        "Admission period: " {active.name.clone()}
                                    </p>
                                })}
                                <ProgramCatalog programs/>
                            </div>
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProgramCatalog(programs: Vec<Program>) -> impl IntoView {
    if programs.is_empty() {
        return view! {
            <div class="home-empty">
                <p>"The program catalog is not available right now. Please check back later."</p>
            </div>
        }
        .into_any();
    }

    // Group by program type, mirroring how the catalog is published.
    let mut by_type: BTreeMap<String, Vec<Program>> = BTreeMap::new();
    for program in programs {
        let type_name = program
            .program_types
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "Other programs".to_string());
        by_type.entry(type_name).or_default().push(program);
    }

    view! {
        <div class="home-programs">
            {by_type.into_iter().map(|(type_name, type_programs)| {
                view! {
                    <section class="home-program-section">
                        <h2>{type_name}</h2>
                        <div class="home-program-grid">
                            {type_programs.into_iter().map(|program| {
                                let apply_href = format!("/apply/{}", program.uuid);
                                view! {
                                    <div class="home-program-card">
                                        <h3>{program.name.clone()}</h3>
                                        <p class="home-program-description">
                                            {program.description.clone()}
                                        </p>
                                        <a class="home-program-apply" href=apply_href>
                                            "Apply"
                                        </a>
                                    </div>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </section>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
