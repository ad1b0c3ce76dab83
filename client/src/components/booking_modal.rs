//! Booking form dialog.
//!
//! The confirm callback only fires when `submission` says so; otherwise the
//! first problem is shown inline and nothing is submitted.

use leptos::prelude::*;

use crate::state::booking::{BookingForm, Submission, submission};

#[component]
pub fn BookingModal(
    #[prop(into)] professional_name: String,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_confirm: Callback<BookingForm>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let address = RwSignal::new(String::new());
    let date_time = RwSignal::new(String::new());
    let problem = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = BookingForm { address: address.get_untracked(), date_time: date_time.get_untracked() };
        match submission(form, submitting.get_untracked()) {
            Submission::Submit(form) => {
                problem.set(None);
                on_confirm.run(form);
            }
            Submission::Invalid(e) => problem.set(Some(e.to_string())),
            Submission::Busy => {}
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <h3 class="modal__title">"Book " {professional_name}</h3>
                <form class="modal__form" on:submit=on_submit>
                    <label class="modal__field">
                        "Service address"
                        <input
                            type="text"
                            placeholder="123 Main St"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="modal__field">
                        "Date and time"
                        <input
                            type="datetime-local"
                            prop:value=move || date_time.get()
                            on:input=move |ev| date_time.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || problem.get().is_some()>
                        <p class="modal__error">{move || problem.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="modal__actions">
                        <button
                            class="btn"
                            type="button"
                            disabled=move || submitting.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Booking…" } else { "Confirm booking" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
