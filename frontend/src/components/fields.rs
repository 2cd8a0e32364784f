use crate::form::FormState;
use crate::{Model, Msg};
use shared::{FieldKind, FieldName, NumericRange};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

fn placeholder(field: FieldName) -> &'static str {
    match field {
        FieldName::Gender => "Select a gender",
        FieldName::City => "Select a city",
        FieldName::Degree => "Select a degree",
        FieldName::SuicidalThoughts => "Do you have suicidal thoughts?",
        _ => "Select an option",
    }
}

/// One labelled form control plus its validation message, if any.
pub fn render_field(form: &FormState, field: FieldName, link: &Scope<Model>) -> Html {
    let control = match field.kind() {
        FieldKind::Choice { required } => render_select(form, field, required, link),
        FieldKind::Number(range) => render_number(form, field, range, link),
    };
    let error = form.error(field);

    html! {
        <div class={classes!("form-item", error.is_some().then_some("has-error"))}>
            <label class="form-label" for={field.key()}>{ field.label() }</label>
            { control }
            {
                if let Some(message) = error {
                    html! { <p class="field-error">{ message.to_string() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_select(form: &FormState, field: FieldName, required: bool, link: &Scope<Model>) -> Html {
    let current = form.input().choice(field).unwrap_or_default().to_string();
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::ChoiceChanged(field, select.value())
    });

    html! {
        <select id={field.key()} name={field.key()} {onchange}>
            <option value="" selected={current.is_empty()} disabled={required}>
                { placeholder(field) }
            </option>
            { for form.choices(field).iter().map(|choice| html! {
                <option value={choice.clone()} selected={*choice == current}>
                    { choice.clone() }
                </option>
            }) }
        </select>
    }
}

fn render_number(
    form: &FormState,
    field: FieldName,
    range: NumericRange,
    link: &Scope<Model>,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::NumberChanged(field, input.value())
    });

    html! {
        <input
            type="number"
            id={field.key()}
            name={field.key()}
            step="1"
            min={range.min.to_string()}
            max={range.max.map(|max| max.to_string())}
            value={form.number_text(field)}
            {oninput}
        />
    }
}
