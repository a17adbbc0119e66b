use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::api::ApiClient;
use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::auth::AuthState;
use crate::client::validate::{self, FieldError};
use crate::model::auth::CredentialsDto;

#[component]
pub fn Register() -> Element {
    let api = use_context::<ApiClient>();
    let mut auth = use_context::<Signal<AuthState>>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut email_error = use_signal(|| None::<FieldError>);
    let mut password_error = use_signal(|| None::<FieldError>);
    let mut confirmation_error = use_signal(|| None::<FieldError>);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        let checked_email = validate::email(&email.read());
        let checked_password = validate::password(&password.read());
        let checked_confirmation =
            validate::password_confirmation(&password.read(), &confirmation.read());

        email_error.set(checked_email.as_ref().err().cloned());
        password_error.set(checked_password.as_ref().err().cloned());
        confirmation_error.set(checked_confirmation.as_ref().err().cloned());

        let (Ok(email), Ok(password), Ok(())) =
            (checked_email, checked_password, checked_confirmation)
        else {
            return;
        };

        submitting.set(true);
        form_error.set(None);
        let api = api.clone();
        spawn(async move {
            match api.register(&CredentialsDto { email, password }).await {
                Ok(session) => {
                    api.tokens().set(&session.token);
                    auth.write().token = Some(session.token);
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    form_error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx!(
        Title { "Sign Up | Planventure" }
        Meta {
            name: "description",
            content: "Create a Planventure account to start planning trips."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h1 { class: "card-title justify-center",
                        "Create your account"
                    }
                    if let Some(err) = form_error() {
                        div { class: "alert alert-error",
                            "{err}"
                        }
                    }
                    label { class: "form-control w-full",
                        div { class: "label",
                            span { class: "label-text", "Email" }
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        if let Some(err) = email_error() {
                            p { class: "text-error text-sm mt-1", "{err}" }
                        }
                    }
                    label { class: "form-control w-full",
                        div { class: "label",
                            span { class: "label-text", "Password" }
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(err) = password_error() {
                            p { class: "text-error text-sm mt-1", "{err}" }
                        }
                    }
                    label { class: "form-control w-full",
                        div { class: "label",
                            span { class: "label-text", "Confirm Password" }
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            value: "{confirmation}",
                            oninput: move |evt| confirmation.set(evt.value()),
                        }
                        if let Some(err) = confirmation_error() {
                            p { class: "text-error text-sm mt-1", "{err}" }
                        }
                    }
                    button {
                        class: "btn btn-primary w-full mt-4",
                        disabled: submitting(),
                        onclick: handle_submit,
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                            "Creating account..."
                        } else {
                            "Sign Up"
                        }
                    }
                    p { class: "text-sm text-center mt-2",
                        "Already have an account? "
                        Link {
                            to: Route::Login {},
                            class: "link link-primary",
                            "Login"
                        }
                    }
                }
            }
        }
    )
}
