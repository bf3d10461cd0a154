use dioxus::prelude::*;

use crate::form::QueryForm;

mod api;
mod form;

fn main() {
	dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("dioxus logger");
	dioxus::launch(App);
}

#[component]
fn App() -> Element {
	rsx! {
		QueryForm {}
	}
}
