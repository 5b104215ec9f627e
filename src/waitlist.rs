use crate::constants::*;
use crate::dom;
use landing_core::{
    SubmitOutcome, SubmitStatus, WaitlistFailure, WaitlistForm, WaitlistRequest, WAITLIST_ENDPOINT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const SUCCESS_CLASS: &str = "success";
const ERROR_CLASS: &str = "error";

#[derive(Clone)]
struct FormDom {
    form: web::HtmlFormElement,
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    agree: Option<web::HtmlInputElement>,
    submit: Option<web::HtmlButtonElement>,
    status: Option<web::HtmlElement>,
}

impl FormDom {
    fn lookup(document: &web::Document) -> Option<Self> {
        Some(Self {
            form: dom::element_by_id(document, WAITLIST_FORM_ID)?,
            name: dom::element_by_id(document, WAITLIST_NAME_ID)?,
            email: dom::element_by_id(document, WAITLIST_EMAIL_ID)?,
            agree: dom::element_by_id(document, WAITLIST_AGREE_ID),
            submit: dom::element_by_id(document, WAITLIST_SUBMIT_ID),
            status: dom::element_by_id(document, WAITLIST_STATUS_ID),
        })
    }

    fn request(&self) -> WaitlistRequest {
        WaitlistRequest::new(
            self.name.value(),
            self.email.value(),
            self.agree.as_ref().map(|a| a.checked()).unwrap_or(false),
        )
    }

    fn render(&self, status: &SubmitStatus) {
        if let Some(button) = &self.submit {
            button.set_disabled(*status == SubmitStatus::Submitting);
        }
        let Some(el) = &self.status else {
            return;
        };
        let classes = el.class_list();
        _ = classes.remove_2(SUCCESS_CLASS, ERROR_CLASS);
        match status {
            SubmitStatus::Idle | SubmitStatus::Submitting => {
                el.set_text_content(None);
                _ = classes.add_1(HIDDEN_CLASS);
            }
            SubmitStatus::Success(msg) => {
                el.set_text_content(Some(msg.as_str()));
                _ = classes.remove_1(HIDDEN_CLASS);
                _ = classes.add_1(SUCCESS_CLASS);
            }
            SubmitStatus::Error(msg) => {
                el.set_text_content(Some(msg.as_str()));
                _ = classes.remove_1(HIDDEN_CLASS);
                _ = classes.add_1(ERROR_CLASS);
            }
        }
    }
}

/// Hook the waitlist form up to the API. Pages without the form are skipped.
pub fn wire_form(document: &web::Document) {
    let Some(fields) = FormDom::lookup(document) else {
        log::info!("[waitlist] no form on this page");
        return;
    };
    let state = Rc::new(RefCell::new(WaitlistForm::new()));

    {
        let state = state.clone();
        let form = fields.form.clone();
        let fields = fields.clone();
        dom::add_listener(&form, "submit", move |ev: web::Event| {
            ev.prevent_default();
            if !state.borrow_mut().begin_submit() {
                return;
            }
            fields.render(state.borrow().status());
            let request = fields.request();
            let state = state.clone();
            let fields = fields.clone();
            spawn_local(async move {
                let outcome = post_signup(&request).await;
                let reset = state.borrow_mut().finish(outcome);
                if reset {
                    fields.form.reset();
                }
                fields.render(state.borrow().status());
            });
        });
    }

    let inputs = [Some(fields.name.clone()), Some(fields.email.clone()), fields.agree.clone()];
    for input in inputs.into_iter().flatten() {
        let state = state.clone();
        let fields = fields.clone();
        dom::add_listener(&input, "input", move |_: web::Event| {
            let before = state.borrow().status().clone();
            state.borrow_mut().field_edited();
            if *state.borrow().status() != before {
                fields.render(state.borrow().status());
            }
        });
    }
}

async fn post_signup(request: &WaitlistRequest) -> SubmitOutcome {
    match send(request).await {
        Ok((true, _)) => SubmitOutcome::Accepted,
        Ok((false, body)) => {
            let error = serde_json::from_str::<WaitlistFailure>(&body)
                .ok()
                .map(|f| f.error);
            log::warn!("[waitlist] rejected: {}", error.as_deref().unwrap_or("no message"));
            SubmitOutcome::Rejected(error)
        }
        Err(e) => {
            log::error!("[waitlist] request failed: {:?}", e);
            SubmitOutcome::NetworkFailure
        }
    }
}

/// `(response.ok, body text)`.
async fn send(request: &WaitlistRequest) -> Result<(bool, String), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let headers = web::Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));
    let req = web::Request::new_with_str_and_init(WAITLIST_ENDPOINT, &init)?;

    let resp: web::Response = JsFuture::from(window.fetch_with_request(&req))
        .await?
        .dyn_into()?;
    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.ok(), text.as_string().unwrap_or_default()))
}
