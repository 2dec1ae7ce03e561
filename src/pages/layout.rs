//! Base HTML document shared by every page.

use maud::{DOCTYPE, Markup, html};

/// Wrap page content in the HTML skeleton: head, Tailwind, body.
pub fn base(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
            }
            body { (content) }
        }
    }
}

/// Success or error banner above a form.
pub fn alert(success: bool, message: &str) -> Markup {
    let (classes, heading) = if success {
        ("p-4 rounded-lg border bg-green-50 border-green-200 text-green-800", "Sucesso!")
    } else {
        ("p-4 rounded-lg border bg-red-50 border-red-200 text-red-800", "Erro!")
    };
    html! {
        div class=(classes) role="alert" {
            p class="font-semibold" { (heading) }
            p class="text-sm" { (message) }
        }
    }
}

/// Inline message under an invalid form field.
pub fn field_error(message: &str) -> Markup {
    html! {
        p class="mt-1 text-sm text-red-600" { (message) }
    }
}
