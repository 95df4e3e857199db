use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

/// Pretend round-trip of the contact request.
const SUBMIT_DELAY_MS: u32 = 2000;
/// How long the thank-you banner stays before the form comes back empty.
const THANK_YOU_MS: u32 = 3000;

pub const SUBJECTS: [(&str, &str); 5] = [
    ("desenvolvimento-web", "Desenvolvimento Web"),
    ("app-mobile", "Aplicativo Mobile"),
    ("automacao", "Automação"),
    ("consultoria", "Consultoria"),
    ("outro", "Outro"),
];

const CONTACT_INFO: [(&str, &str, &str, &str); 3] = [
    ("✉️", "Email", "contato@digaotech.com", "mailto:contato@digaotech.com"),
    ("📞", "Telefone", "+55 (11) 99999-9999", "tel:+5511999999999"),
    ("📍", "Localização", "São Paulo, SP - Brasil", "#"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Subject,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome Completo",
            Field::Email => "Email",
            Field::Company => "Empresa",
            Field::Subject => "Assunto",
            Field::Message => "Mensagem",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Company => next.company = value,
            Field::Subject => next.subject = value,
            Field::Message => next.message = value,
        }
        next
    }

    /// Required fields that are blank or malformed, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(Field::Name);
        }
        if !looks_like_email(&self.email) {
            invalid.push(Field::Email);
        }
        if !SUBJECTS.iter().any(|(value, _)| *value == self.subject) {
            invalid.push(Field::Subject);
        }
        if self.message.trim().is_empty() {
            invalid.push(Field::Message);
        }
        invalid
    }
}

pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Sent,
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(|| FormStatus::Editing);
    let errors = use_state(Vec::<Field>::new);

    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(form.with(Field::Message, input.value()));
        })
    };

    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(form.with(Field::Subject, select.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let errors = errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status != FormStatus::Editing {
                return;
            }
            let invalid = form.invalid_fields();
            if !invalid.is_empty() {
                errors.set(invalid);
                return;
            }
            errors.set(Vec::new());
            status.set(FormStatus::Submitting);
            info!("Contact form submitted for subject {}", form.subject);

            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                status.set(FormStatus::Sent);
                TimeoutFuture::new(THANK_YOU_MS).await;
                form.set(ContactForm::default());
                status.set(FormStatus::Editing);
            });
        })
    };

    let error_for = |field: Field| -> Html {
        if errors.contains(&field) {
            html! { <span class="field-error">{format!("{} é obrigatório", field.label())}</span> }
        } else {
            html! {}
        }
    };

    let submitting = *status == FormStatus::Submitting;

    let form_view = if *status == FormStatus::Sent {
        html! {
            <div class="form-sent">
                <div class="sent-icon">{"✓"}</div>
                <h3>{"Mensagem Enviada!"}</h3>
                <p>{"Obrigado pelo contato. Responderemos em breve!"}</p>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" onsubmit={on_submit}>
                <div class="form-row">
                    <div class="form-field">
                        <label for="name">{"Nome Completo *"}</label>
                        <input type="text" id="name" name="name" placeholder="Seu nome completo"
                            value={form.name.clone()} oninput={on_text(Field::Name)} />
                        {error_for(Field::Name)}
                    </div>
                    <div class="form-field">
                        <label for="email">{"Email *"}</label>
                        <input type="email" id="email" name="email" placeholder="seu@email.com"
                            value={form.email.clone()} oninput={on_text(Field::Email)} />
                        {error_for(Field::Email)}
                    </div>
                </div>
                <div class="form-field">
                    <label for="company">{"Empresa"}</label>
                    <input type="text" id="company" name="company" placeholder="Nome da sua empresa"
                        value={form.company.clone()} oninput={on_text(Field::Company)} />
                </div>
                <div class="form-field">
                    <label for="subject">{"Assunto *"}</label>
                    <select id="subject" name="subject" onchange={on_subject}>
                        <option value="" selected={form.subject.is_empty()}>{"Selecione um assunto"}</option>
                        { for SUBJECTS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={form.subject == *value}>{*label}</option>
                        }) }
                    </select>
                    {error_for(Field::Subject)}
                </div>
                <div class="form-field">
                    <label for="message">{"Mensagem *"}</label>
                    <textarea id="message" name="message" rows="6"
                        placeholder="Conte-nos sobre seu projeto ou dúvida..."
                        value={form.message.clone()} oninput={on_message} />
                    {error_for(Field::Message)}
                </div>
                <button type="submit" class="button-primary" disabled={submitting}>
                    { if submitting { "Enviando..." } else { "Enviar Mensagem" } }
                </button>
            </form>
        }
    };

    html! {
        <section id="contact" class="section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Entre em "}<span class="gradient-text">{"Contato"}</span></h2>
                    <div class="divider"></div>
                    <p>{"Pronto para transformar sua ideia em realidade? Entre em contato conosco e vamos conversar sobre seu próximo projeto."}</p>
                </div>

                <div class="two-columns">
                    <div class="contact-info">
                        <h3>{"Vamos conversar!"}</h3>
                        <p>{"Estamos sempre prontos para discutir novos projetos e oportunidades. Entre em contato conosco através dos canais abaixo ou use o formulário para nos enviar uma mensagem detalhada."}</p>
                        { for CONTACT_INFO.iter().map(|(icon, title, value, link)| html! {
                            <a href={*link} class="card contact-card">
                                <span class="contact-icon">{*icon}</span>
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*value}</p>
                                </div>
                            </a>
                        }) }
                    </div>

                    <div class="card">
                        {form_view}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::default()
            .with(Field::Name, "Marina Silva".into())
            .with(Field::Email, "marina@techstart.com.br".into())
            .with(Field::Subject, "automacao".into())
            .with(Field::Message, "Queremos automatizar o financeiro.".into())
    }

    #[test]
    fn blank_form_lists_every_required_field() {
        assert_eq!(
            ContactForm::default().invalid_fields(),
            vec![Field::Name, Field::Email, Field::Subject, Field::Message]
        );
    }

    #[test]
    fn company_is_optional() {
        assert!(filled().invalid_fields().is_empty());
        assert_eq!(filled().with(Field::Company, "TechStart".into()).company, "TechStart");
    }

    #[test]
    fn unknown_subject_is_rejected() {
        let form = filled().with(Field::Subject, "spam".into());
        assert_eq!(form.invalid_fields(), vec![Field::Subject]);
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("  contato@digaotech.com "));
        assert!(!looks_like_email("contato"));
        assert!(!looks_like_email("@digaotech.com"));
        assert!(!looks_like_email("a@b@c.com"));
        assert!(!looks_like_email("a@localhost"));
        assert!(!looks_like_email("a@.com"));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let form = filled().with(Field::Name, "   ".into());
        assert_eq!(form.invalid_fields(), vec![Field::Name]);
    }
}
