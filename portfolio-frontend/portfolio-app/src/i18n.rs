use std::str::FromStr;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::validation::{Field, Violation};

/// The display language of the page, read once from `<html lang>` at mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Ar,
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::Ar
    }
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `lang` attributes can carry region subtags ("en-US").
        Ok(match s.to_ascii_lowercase().as_str() {
            tag if tag.starts_with("en") => Language::En,
            _ => Language::Ar,
        })
    }
}

/// Reads the document language, defaulting to Arabic when the attribute is
/// missing or empty.
pub fn detect_language() -> Language {
    document()
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.lang())
        .filter(|lang| !lang.is_empty())
        .and_then(|lang| Language::from_str(&lang).ok())
        .unwrap_or_default()
}

pub fn provide_language() -> Language {
    if let Some(existing) = use_context::<Language>() {
        return existing;
    }
    let language = detect_language();
    provide_context(language);
    language
}

pub fn use_language() -> Language {
    use_context::<Language>().unwrap_or_default()
}

pub fn field_error(lang: Language, field: Field, violation: Violation) -> &'static str {
    match (lang, field, violation) {
        (Language::Ar, Field::Name, Violation::Required) => "الاسم مطلوب",
        (Language::Ar, Field::Email, Violation::Required) => "البريد الإلكتروني مطلوب",
        (Language::Ar, Field::Subject, Violation::Required) => "الموضوع مطلوب",
        (Language::Ar, Field::Message, Violation::Required) => "الرسالة مطلوبة",
        (Language::Ar, _, Violation::Email) => "البريد الإلكتروني غير صالح",
        (Language::En, Field::Name, Violation::Required) => "Name is required",
        (Language::En, Field::Email, Violation::Required) => "Email is required",
        (Language::En, Field::Subject, Violation::Required) => "Subject is required",
        (Language::En, Field::Message, Violation::Required) => "Message is required",
        (Language::En, _, Violation::Email) => "Invalid email format",
    }
}

pub fn no_results(lang: Language, query: &str) -> String {
    match lang {
        Language::Ar => format!("لا توجد نتائج لـ \"{query}\""),
        Language::En => format!("No results found for \"{query}\""),
    }
}

pub fn search_placeholder(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "ابحث عن المشاريع...",
        Language::En => "Search projects...",
    }
}

pub fn contact_success(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "شكراً لك! تم إرسال رسالتك بنجاح.",
        Language::En => "Thank you! Your message has been sent successfully.",
    }
}

pub fn contact_default_error(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "حدث خطأ. يرجى المحاولة مرة أخرى.",
        Language::En => "An error occurred. Please try again.",
    }
}

pub fn network_error(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "خطأ في الشبكة. يرجى المحاولة مرة أخرى.",
        Language::En => "Network error. Please try again.",
    }
}

pub fn send_label(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "إرسال الرسالة",
        Language::En => "Send Message",
    }
}

pub fn sending_label(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "جاري الإرسال...",
        Language::En => "Sending...",
    }
}

pub fn confirm_delete_image(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "هل أنت متأكد من حذف هذه الصورة؟",
        Language::En => "Are you sure you want to delete this image?",
    }
}

pub fn image_deleted(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "تم حذف الصورة بنجاح",
        Language::En => "Image deleted successfully",
    }
}

pub fn image_delete_failed(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "حدث خطأ أثناء حذف الصورة. يرجى المحاولة مرة أخرى.",
        Language::En => "Failed to delete the image. Please try again.",
    }
}

pub fn upload_failed(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "حدث خطأ أثناء رفع البيانات. يرجى المحاولة مرة أخرى.",
        Language::En => "Failed to upload. Please try again.",
    }
}

pub fn uploading(lang: Language, percent: u32) -> String {
    match lang {
        Language::Ar => format!("جاري رفع الصور... {percent}%"),
        Language::En => format!("Uploading images... {percent}%"),
    }
}

pub fn new_images_preview(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "معاينة الصور الجديدة:",
        Language::En => "New image preview:",
    }
}

pub fn save_label(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "حفظ",
        Language::En => "Save",
    }
}

pub fn nav_home(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "الرئيسية",
        Language::En => "Home",
    }
}

pub fn nav_projects(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "المشاريع",
        Language::En => "Projects",
    }
}

pub fn nav_contact(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "اتصل بي",
        Language::En => "Contact",
    }
}

pub fn home_heading(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "مرحباً بكم في معرض أعمالي",
        Language::En => "Welcome to my portfolio",
    }
}

pub fn home_tagline(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "مطور برمجيات، مشاريع ويب وتطبيقات",
        Language::En => "Software developer, web projects and applications",
    }
}

pub fn browse_projects(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "تصفح المشاريع",
        Language::En => "Browse projects",
    }
}

pub fn contact_heading(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "اتصل بي",
        Language::En => "Contact Me",
    }
}

pub fn projects_heading(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "المشاريع",
        Language::En => "Projects",
    }
}

pub fn search_hint(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "ابحث باسم المشروع أو وصفه",
        Language::En => "Search by project name or description",
    }
}

pub fn page_not_found(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "الصفحة غير موجودة",
        Language::En => "Page not found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags_parse_with_region_subtags() {
        assert_eq!(Language::from_str("en"), Ok(Language::En));
        assert_eq!(Language::from_str("en-US"), Ok(Language::En));
        assert_eq!(Language::from_str("ar"), Ok(Language::Ar));
        // unknown tags fall back to the site default
        assert_eq!(Language::from_str("fr"), Ok(Language::Ar));
    }

    #[test]
    fn no_results_embeds_the_literal_query() {
        assert_eq!(
            no_results(Language::En, "flask"),
            "No results found for \"flask\""
        );
        assert!(no_results(Language::Ar, "متجر").contains("متجر"));
    }

    #[test]
    fn field_errors_are_localized() {
        assert_eq!(
            field_error(Language::En, Field::Email, Violation::Required),
            "Email is required"
        );
        assert_eq!(
            field_error(Language::Ar, Field::Email, Violation::Email),
            "البريد الإلكتروني غير صالح"
        );
    }
}
