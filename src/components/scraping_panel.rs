//! Scraping Panel
//!
//! The three scraping action slots: WhatsApp analysis, email scraping, and
//! Instagram scraping for a given username. Each slot owns its own
//! `ActionState` signal, so two different slots can be in flight at once
//! while any single slot refuses re-submission until its call resolves.

use leptos::*;
use serde_json::Value;

use crate::api::{self, ApiError};
use crate::components::loading::InlineLoading;
use crate::components::result_display::ResultDisplay;
use crate::state::action::ActionState;

/// Move a slot to in-flight and resolve it with the future's outcome. Does
/// nothing (and never polls the future) while the slot is already in flight.
fn launch<Fut>(slot: RwSignal<ActionState<Value>>, fut: Fut)
where
    Fut: std::future::Future<Output = Result<Value, ApiError>> + 'static,
{
    if !slot.get_untracked().can_submit() {
        return;
    }
    slot.set(ActionState::InFlight);

    spawn_local(async move {
        match fut.await {
            Ok(value) => slot.set(ActionState::Succeeded(value)),
            Err(e) => slot.set(ActionState::Failed(e.to_string())),
        }
    });
}

/// Scraping tools panel
#[component]
pub fn ScrapingPanel() -> impl IntoView {
    let whatsapp = create_rw_signal(ActionState::<Value>::Idle);
    let email = create_rw_signal(ActionState::<Value>::Idle);
    let instagram = create_rw_signal(ActionState::<Value>::Idle);

    let (insta_username, set_insta_username) = create_signal("snuc_omnia".to_string());

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Data Scraping Tools"</h2>

            // WhatsApp
            <div class="mb-4">
                <button
                    on:click=move |_| launch(whatsapp, api::trigger_whatsapp_analysis())
                    disabled=move || whatsapp.get().is_in_flight()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    <BusyLabel
                        busy=Signal::derive(move || whatsapp.get().is_in_flight())
                        idle="Analyze WhatsApp Chats"
                        busy_text="Analyzing..."
                    />
                </button>
                <SlotError state=whatsapp />
                <ResultDisplay
                    title="WhatsApp Analysis Result"
                    data=Signal::derive(move || whatsapp.with(|s| s.payload().cloned()))
                />
            </div>

            <hr class="border-gray-700 my-4" />

            // Email
            <div class="mb-4">
                <button
                    on:click=move |_| launch(email, api::trigger_email_scraping())
                    disabled=move || email.get().is_in_flight()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    <BusyLabel
                        busy=Signal::derive(move || email.get().is_in_flight())
                        idle="Scrape Emails"
                        busy_text="Scraping..."
                    />
                </button>
                <SlotError state=email />
                <ResultDisplay
                    title="Email Scraper Result"
                    data=Signal::derive(move || email.with(|s| s.payload().cloned()))
                />
            </div>

            <hr class="border-gray-700 my-4" />

            // Instagram
            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    "Instagram Username"
                </label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        id="insta-user"
                        prop:value=move || insta_username.get()
                        on:input=move |ev| set_insta_username.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=move |_| {
                            let username = insta_username.get();
                            launch(instagram, async move {
                                api::trigger_instagram_scraping(&username).await
                            });
                        }
                        disabled=move || instagram.get().is_in_flight()
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        <BusyLabel
                            busy=Signal::derive(move || instagram.get().is_in_flight())
                            idle="Scrape Instagram"
                            busy_text="Scraping..."
                        />
                    </button>
                </div>
                <SlotError state=instagram />
                <ResultDisplay
                    title="Instagram Scraper Result"
                    data=Signal::derive(move || instagram.with(|s| s.payload().cloned()))
                />
            </div>
        </section>
    }
}

/// Button label that swaps to an in-progress spinner and text.
#[component]
fn BusyLabel(
    #[prop(into)]
    busy: Signal<bool>,
    idle: &'static str,
    busy_text: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            if busy.get() {
                view! {
                    <span class="flex items-center justify-center space-x-2">
                        <InlineLoading />
                        <span>{busy_text}</span>
                    </span>
                }.into_view()
            } else {
                view! { <span>{idle}</span> }.into_view()
            }
        }}
    }
}

/// Inline error alert for one action slot.
#[component]
fn SlotError(state: RwSignal<ActionState<Value>>) -> impl IntoView {
    view! {
        {move || {
            state.with(|s| s.error().map(String::from)).map(|msg| view! {
                <div class="mt-2 bg-red-900/50 border border-red-700 text-red-200
                            rounded-lg px-4 py-2 text-sm">
                    {msg}
                </div>
            })
        }}
    }
}
