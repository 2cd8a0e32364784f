use crate::form::Notice;
use crate::{Model, Msg};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::html::Scope;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

pub fn notice_class(notice: &Notice) -> &'static str {
    match notice {
        Notice::Success(_) => "notice-success",
        Notice::Failure(_) => "error-message",
    }
}

pub fn render_notice(notice: Option<&Notice>, link: &Scope<Model>) -> Html {
    let Some(notice) = notice else {
        return html! {};
    };
    let text = match notice {
        Notice::Success(text) | Notice::Failure(text) => text.clone(),
    };

    html! {
        <div class={classes!("notice", notice_class(notice))} role="status">
            <p>{ text }</p>
            <button
                class="remove-btn"
                type="button"
                title="Dismiss"
                onclick={link.callback(|_| Msg::DismissNotice)}
            >
                {"×"}
            </button>
        </div>
    }
}
