//! Clustering Panel
//!
//! Textarea for club data, submission to the clustering endpoint, and
//! rendering of the ranked result. Input is validated locally before any
//! network call: malformed JSON surfaces an "Invalid JSON" message and
//! leaves the previous result on screen.

use leptos::*;

use crate::api::{self, Club, ClubDataInput, ClusteringResult};
use crate::components::loading::Loading;
use crate::state::action::ActionState;

/// Parse the operator's textarea content into a clustering request.
pub fn parse_club_input(input: &str) -> Result<ClubDataInput, String> {
    serde_json::from_str(input).map_err(|e| format!("Invalid JSON: {}", e))
}

/// Display label for a zero-based cluster id.
pub fn cluster_label(cluster_id: u32) -> String {
    format!("Cluster {}", cluster_id + 1)
}

/// Display text for an engagement score.
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

/// Sample club data prefilled into the textarea, from the SNUC club roster
/// the backend was built around.
fn sample_clubs() -> ClubDataInput {
    ClubDataInput {
        clubs: vec![
            Club {
                name: "Rhythm".to_string(),
                description: "Rhythm is SNUC's very own dance club which aims to provide a space \
                              for students, regardless of prior experience to explore the various \
                              forms of dance and to use dance as a mode of expression."
                    .to_string(),
            },
            Club {
                name: "Capturesque".to_string(),
                description: "CAPTURESQUE is a platform created to bring students of the same \
                              creative interest closer to seeing the world through a lens. They \
                              intend to be the designated photographer for university events, \
                              conduct learning sessions and represent our university in \
                              photography competitions."
                    .to_string(),
            },
            Club {
                name: "Omnia".to_string(),
                description: "The Omnia club is a vibrant hub on campus dedicated to protecting \
                              animals, fostering inclusivity for the LGBTQ+ community, and \
                              championing environmental preservation."
                    .to_string(),
            },
            Club {
                name: "Atwas".to_string(),
                description: "All The World's A Stage (ATWAS) intends to set up the stage, pull \
                              back the curtains, and introduce the world of theatre to SNUC."
                    .to_string(),
            },
            Club {
                name: "Ameya".to_string(),
                description: "We are an expressive club of trained and passionate dancers who \
                              always strive to bring our best to the stage, conveying emotion \
                              through classical dance at university events and cultural fests."
                    .to_string(),
            },
        ],
    }
}

/// Textarea default: the sample clubs, pretty-printed.
fn sample_club_input() -> String {
    serde_json::to_string_pretty(&sample_clubs()).unwrap_or_default()
}

/// Clustering and ranking panel
#[component]
pub fn ClusteringPanel() -> impl IntoView {
    let (json_input, set_json_input) = create_signal(sample_club_input());
    let input_error = create_rw_signal(None::<String>);
    let action = create_rw_signal(ActionState::<ClusteringResult>::Idle);

    let submit = move |_| {
        if !action.get_untracked().can_submit() {
            return;
        }
        input_error.set(None);

        // Validate locally first; a parse failure must not issue a request
        // or disturb the last result.
        let request = match parse_club_input(&json_input.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                input_error.set(Some(msg));
                return;
            }
        };

        action.set(ActionState::InFlight);
        spawn_local(async move {
            match api::group_clubs(&request).await {
                Ok(result) => action.set(ActionState::Succeeded(result)),
                Err(e) => action.set(ActionState::Failed(e.to_string())),
            }
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Club Clustering & Ranking Tool"</h2>

            <div class="mb-4">
                <label class="block text-sm text-gray-400 mb-2">
                    "Club Data (JSON format)"
                </label>
                <textarea
                    id="club-data-json"
                    rows="8"
                    prop:value=move || json_input.get()
                    on:input=move |ev| set_json_input.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 font-mono text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                on:click=submit
                disabled=move || action.get().is_in_flight()
                class="w-full px-4 py-3 bg-green-600 hover:bg-green-700 disabled:bg-gray-700
                       rounded-lg font-medium transition-colors"
            >
                {move || if action.get().is_in_flight() { "Processing..." } else { "Group and Rank Clubs" }}
            </button>

            // Local validation error
            {move || {
                input_error.get().map(|msg| view! {
                    <div class="mt-2 bg-yellow-900/50 border border-yellow-700 text-yellow-200
                                rounded-lg px-4 py-2 text-sm">
                        {msg}
                    </div>
                })
            }}

            // Backend error
            {move || {
                action.with(|s| s.error().map(String::from)).map(|msg| view! {
                    <div class="mt-2 bg-red-900/50 border border-red-700 text-red-200
                                rounded-lg px-4 py-2 text-sm">
                        {msg}
                    </div>
                })
            }}

            // In-flight spinner / results
            {move || {
                if action.get().is_in_flight() {
                    view! { <Loading /> }.into_view()
                } else {
                    action.with(|s| s.payload().cloned()).map(|result| view! {
                        <ClusteringResults result=result />
                    }).into_view()
                }
            }}
        </section>
    }
}

/// Rendered clusters and outliers.
#[component]
fn ClusteringResults(result: ClusteringResult) -> impl IntoView {
    let outliers = result.outliers.clone();

    view! {
        <div class="mt-4">
            <h3 class="text-lg font-semibold mb-3">"Results"</h3>

            <h4 class="text-sm font-semibold text-gray-300 mb-2">"Clusters"</h4>
            {if result.clusters.is_empty() {
                view! { <p class="text-gray-400 text-sm">"No clusters were formed."</p> }.into_view()
            } else {
                result.clusters.iter().map(|cluster| {
                    view! {
                        <div class="mb-3 bg-gray-900 border border-gray-700 rounded-lg p-4">
                            <h5 class="font-semibold mb-2">{cluster_label(cluster.cluster_id)}</h5>
                            <ul class="divide-y divide-gray-700">
                                {cluster.clubs.iter().map(|club| view! {
                                    <li class="flex items-center justify-between py-2">
                                        <span class="flex items-center space-x-2">
                                            <span class="bg-primary-600 text-xs font-semibold
                                                         rounded-full px-2 py-1">
                                                {club.rank}
                                            </span>
                                            <span>{club.name.clone()}</span>
                                        </span>
                                        <span class="text-gray-400 text-sm">
                                            {format!("Score: {}", format_score(club.total_engagement_score))}
                                        </span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }
                }).collect_view().into_view()
            }}

            <h4 class="text-sm font-semibold text-gray-300 mt-4 mb-2">"Outliers"</h4>
            {if outliers.is_empty() {
                view! { <p class="text-gray-400 text-sm">"No outliers found."</p> }.into_view()
            } else {
                view! {
                    <ul class="space-y-1">
                        {outliers.into_iter().map(|name| view! {
                            <li class="bg-gray-900 border border-gray-700 rounded-lg px-4 py-2 text-sm">
                                {name}
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_input_parses_back() {
        let request = parse_club_input(&sample_club_input()).unwrap();
        assert_eq!(request.clubs.len(), 5);
        assert_eq!(request.clubs[0].name, "Rhythm");
    }

    #[test]
    fn test_malformed_input_is_rejected_locally() {
        let err = parse_club_input("{\"clubs\": [").unwrap_err();
        assert!(err.starts_with("Invalid JSON"));

        let err = parse_club_input("{\"clubs\": \"not a list\"}").unwrap_err();
        assert!(err.starts_with("Invalid JSON"));
    }

    #[test]
    fn test_cluster_label_is_one_based() {
        assert_eq!(cluster_label(0), "Cluster 1");
        assert_eq!(cluster_label(4), "Cluster 5");
    }

    #[test]
    fn test_score_renders_three_decimals() {
        assert_eq!(format_score(0.5), "0.500");
        assert_eq!(format_score(1.0), "1.000");
        assert_eq!(format_score(0.1234), "0.123");
    }
}
