use common::{ActionMode, GENERIC_FAILURE_MESSAGE, History, QueryRequest, TypingReveal};
use dioxus::core::Task;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api;

const TYPING_INTERVAL_MS: u32 = 10;

/// The interaction controller: owns the submission lifecycle, the history
/// list, and the typing-reveal animation over the newest response.
#[component]
pub fn QueryForm() -> Element {
	let mut input = use_signal(String::new);
	let mut error = use_signal(String::new);
	let mut typing_effect = use_signal(String::new);
	let mut action = use_signal(ActionMode::default);
	let mut history = use_signal(History::default);
	let mut in_flight = use_signal(|| false);
	let mut typing_task: Signal<Option<Task>> = use_signal(|| None);

	// Cancels any running reveal before starting the next one, so a stale
	// task can never write into a newer entry's buffer.
	let mut start_typing = move |text: String| {
		if let Some(task) = typing_task.write().take() {
			task.cancel();
		}
		typing_effect.set(String::new());
		let task = spawn(async move {
			let mut reveal = TypingReveal::new(&text);
			while let Some(prefix) = reveal.advance() {
				TimeoutFuture::new(TYPING_INTERVAL_MS).await;
				typing_effect.set(prefix);
			}
			typing_task.set(None);
		});
		typing_task.set(Some(task));
	};

	let on_submit = move |_: FormEvent| async move {
		let text = input();
		// Empty submissions are silently ignored; a submission while one is
		// still in flight is rejected outright.
		if text.is_empty() || in_flight() {
			return;
		}
		in_flight.set(true);
		// Supersede any reveal still running for the previous entry before
		// the typing buffer starts rendering under the new one.
		if let Some(task) = typing_task.write().take() {
			task.cancel();
		}
		history.write().push_pending(text.as_str());
		typing_effect.set(String::new());
		error.set(String::new());

		match api::submit_query(&QueryRequest::for_action(action(), text)).await {
			Ok(response) => {
				history.write().complete_last(response.as_str());
				start_typing(response);
			},
			Err(e) => {
				tracing::error!("query submission failed: {e}");
				error.set(GENERIC_FAILURE_MESSAGE.to_string());
			},
		}
		input.set(String::new());
		in_flight.set(false);
	};

	let on_clear = move |_| {
		if let Some(task) = typing_task.write().take() {
			task.cancel();
		}
		history.write().clear();
		typing_effect.set(String::new());
		error.set(String::new());
	};

	let entries = history.read().entries().to_vec();
	let newest = entries.len().checked_sub(1);

	rsx! {
		div { class: "flex flex-col md:flex-row gap-8 max-w-5xl mx-auto p-6",
			div { class: "md:w-1/3 text-gray-700",
				h2 { class: "text-2xl font-bold text-gray-900 mb-2", "TextMaster" }
				h3 { class: "text-lg font-semibold mt-4 mb-1", "Capabilities" }
				ul { class: "list-disc list-inside text-sm",
					li { "Summarization of long texts" }
					li { "Translation between multiple languages" }
				}
				h3 { class: "text-lg font-semibold mt-4 mb-1", "Steps to Use:" }
				ol { class: "list-decimal list-inside text-sm space-y-1",
					li { "For summarization, select \"Summarize\" and add the text you need a summary of in the input box." }
					li {
						"To utilize the translation feature, please select \"Translate\" and format your input as follows:"
						br {}
						code { class: "text-xs bg-gray-100 px-1 rounded", "Translate to \"desired language\": \"your text to be translated\"" }
					}
				}
			}

			div { class: "md:w-2/3",
				form { class: "flex flex-col gap-4", onsubmit: on_submit,
					label { class: "text-sm font-medium text-gray-700",
						"Your text Here:"
						textarea {
							class: "w-full mt-1 px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
							rows: 10,
							required: true,
							value: "{input}",
							oninput: move |evt| input.set(evt.value()),
						}
					}

					div { class: "flex gap-6",
						for mode in [ActionMode::Summarize, ActionMode::Translate] {
							label { class: "flex items-center gap-2 text-sm text-gray-700",
								input {
									r#type: "radio",
									name: "action",
									value: "{mode}",
									checked: action() == mode,
									onchange: move |evt| {
										if let Ok(selected) = evt.value().parse() {
											action.set(selected);
										}
									},
								}
								{mode.label()}
							}
						}
					}

					div { class: "flex gap-4",
						button {
							class: "px-4 py-2 text-white font-semibold rounded-md shadow-sm bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed",
							r#type: "submit",
							disabled: in_flight(),
							if in_flight() { "Working..." } else { "Submit" }
						}
						button {
							class: "px-4 py-2 font-semibold rounded-md shadow-sm border border-gray-300 text-gray-700 hover:bg-gray-100",
							r#type: "button",
							onclick: on_clear,
							"Clear All"
						}
					}

					if !error().is_empty() {
						p { class: "text-red-600 text-sm font-medium", "{error}" }
					}
				}

				for (index, entry) in entries.iter().enumerate() {
					div {
						key: "{index}",
						class: "mt-6 p-4 bg-gray-50 border border-gray-200 rounded-md",
						onmounted: move |evt| async move {
							let _ = evt.data().scroll_to(ScrollBehavior::Smooth).await;
						},
						p { class: "text-sm text-gray-800 whitespace-pre-wrap mb-2", "{entry.input}" }
						textarea {
							class: "w-full px-3 py-2 bg-white border border-gray-200 rounded-md text-sm text-gray-700",
							rows: 5,
							readonly: true,
							// The newest entry renders the paced reveal; older
							// entries always render their stored response.
							value: if Some(index) == newest { typing_effect() } else { entry.response.clone() },
						}
					}
				}
			}
		}
	}
}
