//! Public landing page — login and sign-up tabs.
//!
//! The tab card mirrors the product's original layout: a header, two tabs
//! switched by the `?tab=` query parameter, and one form per tab. Form values
//! and field errors are threaded back in after a failed POST so the user
//! never loses what they typed (passwords excepted — those are never echoed
//! into markup).

use maud::{Markup, html};

use super::layout;
use crate::validate::FieldErrors;

// =============================================================================
// VIEW STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Login,
    SignUp,
}

impl Tab {
    /// Parse the `?tab=` query value; anything unrecognized lands on login.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("signup") => Self::SignUp,
            _ => Self::Login,
        }
    }
}

/// Banner shown above a form after a submission.
#[derive(Debug, Clone, Copy)]
pub struct Notice {
    pub success: bool,
    pub message: &'static str,
}

/// Login form state carried across a failed submission.
#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub email: String,
    pub errors: FieldErrors,
    pub notice: Option<Notice>,
}

/// Sign-up form state carried across a failed submission.
#[derive(Debug, Clone, Default)]
pub struct SignUpView {
    pub name: String,
    pub email: String,
    pub errors: FieldErrors,
    pub notice: Option<Notice>,
}

/// Everything the landing page needs to render.
#[derive(Debug, Clone)]
pub struct LandingProps {
    pub tab: Tab,
    pub login: LoginView,
    pub signup: SignUpView,
}

impl LandingProps {
    /// Pristine page with the given tab active.
    #[must_use]
    pub fn new(tab: Tab) -> Self {
        Self { tab, login: LoginView::default(), signup: SignUpView::default() }
    }
}

// =============================================================================
// MARKUP
// =============================================================================

/// Render the full landing page.
pub fn page(props: &LandingProps) -> Markup {
    layout::base(
        "Inventory Pro",
        html! {
            main class="flex min-h-screen flex-col items-center justify-center p-4 bg-slate-50" {
                div class="w-full max-w-[600px] mx-auto" {
                    div class="mb-8 text-center" {
                        h1 class="text-3xl font-bold tracking-tight text-slate-900 mb-2" { "Inventory Pro" }
                        p class="text-slate-500" { "Sistema de gerenciamento de custos e lucros para revenda" }
                    }

                    div class="bg-white border border-slate-200 shadow-lg rounded-lg" {
                        (tab_bar(props.tab))
                        @match props.tab {
                            Tab::Login => (login_panel(&props.login)),
                            Tab::SignUp => (signup_panel(&props.signup)),
                        }
                    }

                    div class="mt-8 text-center text-sm text-slate-500" {
                        p { "© 2025 Inventory Pro. Todos os direitos reservados." }
                    }
                }
            }
        },
    )
}

fn tab_bar(active: Tab) -> Markup {
    html! {
        div class="grid grid-cols-2 h-14 bg-slate-100 p-1 rounded-t-lg" {
            (tab_link("/?tab=login", "Login", active == Tab::Login))
            (tab_link("/?tab=signup", "Registrar-se", active == Tab::SignUp))
        }
    }
}

fn tab_link(href: &str, label: &str, active: bool) -> Markup {
    let classes = if active {
        "flex items-center justify-center rounded-md bg-white text-slate-900 shadow-sm font-medium"
    } else {
        "flex items-center justify-center rounded-md text-slate-500 hover:text-slate-900 font-medium"
    };
    html! {
        a href=(href) class=(classes) { (label) }
    }
}

fn login_panel(view: &LoginView) -> Markup {
    html! {
        div class="p-6 space-y-4" {
            div class="text-center pb-2" {
                h2 class="text-2xl text-slate-900" { "Acesse sua conta" }
                p class="text-slate-500" { "Entre com suas credenciais para acessar o sistema" }
            }

            @if let Some(notice) = view.notice {
                (layout::alert(notice.success, notice.message))
            }

            form method="post" action="/auth/sign-in" class="space-y-4" {
                div {
                    label for="login-email" class="block mb-1 text-sm font-medium text-slate-700" { "Email" }
                    input id="login-email" name="email" type="email" value=(view.email)
                        placeholder="seu@email.com"
                        class="block w-full rounded-md border border-slate-300 p-2.5 text-sm";
                    @if let Some(msg) = view.errors.email { (layout::field_error(msg)) }
                }
                div {
                    div class="flex items-center justify-between mb-1" {
                        label for="login-password" class="text-sm font-medium text-slate-700" { "Senha" }
                        a href="/?tab=login&forgot=1" class="text-xs text-slate-500 hover:text-slate-900" {
                            "Esqueceu a senha?"
                        }
                    }
                    input id="login-password" name="password" type="password" placeholder="••••••••"
                        class="block w-full rounded-md border border-slate-300 p-2.5 text-sm";
                    @if let Some(msg) = view.errors.password { (layout::field_error(msg)) }
                }
                button type="submit"
                    class="w-full py-3 text-base rounded-md text-white bg-slate-900 hover:bg-slate-800" {
                    "Entrar"
                }
            }

            p class="text-sm text-center text-slate-500 pb-2" {
                "Ao entrar, você concorda com nossos "
                a href="#" class="text-slate-900 hover:underline" { "Termos de Serviço" }
            }
        }
    }
}

fn signup_panel(view: &SignUpView) -> Markup {
    html! {
        div class="p-6 space-y-4" {
            div class="text-center pb-2" {
                h2 class="text-2xl text-slate-900" { "Crie uma conta" }
                p class="text-slate-500" { "Registre-se para gerenciar seus custos e lucros" }
            }

            @if let Some(notice) = view.notice {
                (layout::alert(notice.success, notice.message))
            }

            form method="post" action="/auth/sign-up" class="space-y-4" {
                div {
                    label for="signup-name" class="block mb-1 text-sm font-medium text-slate-700" { "Nome" }
                    input id="signup-name" name="name" type="text" value=(view.name)
                        placeholder="Seu nome completo"
                        class="block w-full rounded-md border border-slate-300 p-2.5 text-sm";
                    @if let Some(msg) = view.errors.name { (layout::field_error(msg)) }
                }
                div {
                    label for="signup-email" class="block mb-1 text-sm font-medium text-slate-700" { "Email" }
                    input id="signup-email" name="email" type="email" value=(view.email)
                        placeholder="seu@email.com"
                        class="block w-full rounded-md border border-slate-300 p-2.5 text-sm";
                    @if let Some(msg) = view.errors.email { (layout::field_error(msg)) }
                }
                div {
                    label for="signup-password" class="block mb-1 text-sm font-medium text-slate-700" { "Senha" }
                    input id="signup-password" name="password" type="password" placeholder="Crie uma senha forte"
                        class="block w-full rounded-md border border-slate-300 p-2.5 text-sm";
                    p class="mt-1 text-xs text-slate-500" { "A senha deve ter pelo menos 8 caracteres" }
                    @if let Some(msg) = view.errors.password { (layout::field_error(msg)) }
                }
                button type="submit"
                    class="w-full py-3 text-base rounded-md text-white bg-slate-900 hover:bg-slate-800" {
                    "Criar conta"
                }
            }

            p class="text-sm text-center text-slate-500 pb-2" {
                "Ao se registrar, você concorda com nossos "
                a href="#" class="text-slate-900 hover:underline" { "Termos de Serviço" }
            }
        }
    }
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
