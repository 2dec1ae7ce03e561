//! Authenticated shell — side navigation plus a content slot.

use maud::{Markup, html};

use super::layout;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("/user-app", "Dashboard"),
    ("/user-app/produtos", "Produtos"),
    ("/user-app/custos", "Custos"),
];

/// Wrap authenticated content in the shell: side navbar + main slot.
pub fn page(email: Option<&str>, content: Markup) -> Markup {
    layout::base(
        "Inventory Pro",
        html! {
            div class="min-h-screen w-full bg-white text-black flex" {
                (side_navbar(email))
                main class="p-8 w-full" { (content) }
            }
        },
    )
}

fn side_navbar(email: Option<&str>) -> Markup {
    html! {
        nav class="w-64 min-h-screen border-r border-slate-200 p-4 flex flex-col" {
            p class="text-xl font-bold text-slate-900 mb-6" { "Inventory Pro" }
            ul class="space-y-1 flex-1" {
                @for (href, label) in NAV_ITEMS {
                    li {
                        a href=(href) class="block rounded-md px-3 py-2 text-slate-700 hover:bg-slate-100" {
                            (label)
                        }
                    }
                }
            }
            @if let Some(email) = email {
                p class="text-xs text-slate-500 truncate mb-2" { (email) }
            }
            form method="post" action="/auth/sign-out" {
                button type="submit"
                    class="w-full rounded-md px-3 py-2 text-left text-slate-700 hover:bg-slate-100" {
                    "Sair"
                }
            }
        }
    }
}

/// Dashboard content for `/user-app`.
pub fn dashboard() -> Markup {
    html! {
        h1 class="text-2xl font-bold text-slate-900 mb-2" { "Bem-vindo ao Inventory Pro" }
        p class="text-slate-500" { "Gerencie seus custos e lucros de revenda pelo menu ao lado." }
    }
}

/// Placeholder content for nested `/user-app/{section}` pages.
pub fn section(path: &str) -> Markup {
    html! {
        h1 class="text-2xl font-bold text-slate-900 mb-2" { "Em breve" }
        p class="text-slate-500" { "A seção \"" (path) "\" ainda está em desenvolvimento." }
    }
}
