use dioxus::prelude::*;
use ecoleta_shared::form::PointForm;

#[component]
fn TextField(
    form: Signal<PointForm>,
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
) -> Element {
    rsx! {
        div { class: "field",
            label { r#for: name, "{label}" }
            input {
                r#type: input_type,
                name: name,
                id: name,
                oninput: move |evt: Event<FormData>| {
                    form.write().update_field(name, evt.value());
                },
            }
        }
    }
}

#[component]
pub fn ContactFields(form: Signal<PointForm>) -> Element {
    rsx! {
        fieldset {
            legend {
                h2 { "Dados" }
            }
            TextField { form, name: "name", label: "Nome da entidade", input_type: "text" }
            div { class: "field-group",
                TextField { form, name: "email", label: "E-mail", input_type: "email" }
                TextField { form, name: "whatsapp", label: "Whatsapp", input_type: "text" }
            }
        }
    }
}
