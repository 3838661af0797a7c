//! System instruction for the Health AI assistant
//!
//! Built once from the clinic facts and the service catalog so the page
//! and the assistant can never disagree about phone numbers or services.

use crate::content::{ClinicInfo, Service, CLINIC, SERVICES};
use std::fmt::Write;

/// Build the assistant's fixed system instruction
pub fn build_system_prompt() -> String {
    render(&CLINIC, SERVICES)
}

fn render(clinic: &ClinicInfo, services: &[Service]) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You are the {} AI Health Assistant.",
        clinic.name
    );
    let _ = writeln!(
        prompt,
        "{} is a {} Accredited facility in {}.",
        clinic.name, clinic.accreditation, clinic.locality
    );
    let _ = writeln!(prompt, "Our slogan is \"{}\".", clinic.slogan);
    let _ = writeln!(
        prompt,
        "Contacts: Phone {}, Email {}.",
        clinic.phone,
        clinic.emails.join(" or ")
    );
    prompt.push_str("You provide general health information and explain our services:\n");
    for service in services {
        let _ = writeln!(prompt, "- {}", service.summary);
    }
    prompt.push_str("ALWAYS clarify that you are an AI and not a doctor.\n");
    let _ = writeln!(
        prompt,
        "For emergencies or specific diagnoses, advise the user to visit {} in {} or call {}.",
        clinic.name,
        clinic.locality.split(',').next().unwrap_or(clinic.locality),
        clinic.phone
    );
    prompt.push_str("Be compassionate, professional, and helpful.");

    prompt
}
