//! The chains behind each form page.

use crate::chain::{Checklist, SelectorChain, SelectorField, Target};
use clinic_core::dom;
use clinic_core::endpoint::Endpoint;

/// Patient/clinic address: country → state → city.
pub fn locations(endpoint_base: &str) -> SelectorChain {
    SelectorChain::new(endpoint_base)
        .with_field(SelectorField::new(dom::COUNTRY, "country", "Select a country"))
        .with_field(
            SelectorField::new(dom::STATE, "state", "Select a state")
                .blocked_with("Select a country first"),
        )
        .with_field(
            SelectorField::new(dom::CITY, "city", "Select a city")
                .blocked_with("Select a state first"),
        )
        .with_link(0, Target::Field(1), Endpoint::States, &[("country_id", 0)])
        .with_link(1, Target::Field(2), Endpoint::Cities, &[("state_id", 1)])
}

/// Appointment booking: procedure → clinic → doctor → timeslot.
pub fn appointment(endpoint_base: &str) -> SelectorChain {
    SelectorChain::new(endpoint_base)
        .with_field(SelectorField::new(dom::PROCEDURE, "procedure", "Select a procedure"))
        .with_field(SelectorField::new(dom::CLINIC, "clinic", "Select a clinic"))
        .with_field(SelectorField::new(dom::DOCTOR, "doctor", "Select a doctor"))
        .with_field(SelectorField::new(
            dom::APPOINTMENT_DATE,
            "appointment_date",
            "Select a time slot",
        ))
        .with_link(0, Target::Field(1), Endpoint::Clinics, &[("procedure_id", 0)])
        .with_link(
            1,
            Target::Field(2),
            Endpoint::Doctors,
            &[("procedure_id", 0), ("clinic_id", 1)],
        )
        .with_link(
            2,
            Target::Field(3),
            Endpoint::Timeslots,
            &[("doctor_id", 2), ("clinic_id", 1)],
        )
}

/// Visit record: clinic → doctor → timeslot, with the doctor's procedures
/// loaded as checkboxes alongside the timeslots.
pub fn visit(endpoint_base: &str) -> SelectorChain {
    SelectorChain::new(endpoint_base)
        .with_field(SelectorField::new(dom::CLINIC, "clinic", "Select a clinic"))
        .with_field(SelectorField::new(dom::DOCTOR, "doctor", "Select a doctor"))
        .with_field(SelectorField::new(dom::VISIT_DATE, "visit_date", "Select a time slot"))
        .with_checklist(Checklist::new(dom::PROCEDURES_CONTAINER, dom::PROCEDURES_DONE))
        .with_link(0, Target::Field(1), Endpoint::Doctors, &[("clinic_id", 0)])
        .with_link(
            1,
            Target::Field(2),
            Endpoint::Timeslots,
            &[("doctor_id", 1), ("clinic_id", 0)],
        )
        .with_link(1, Target::Checklist(0), Endpoint::Procedures, &[("doctor_id", 1)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Preselection;
    use crate::testing::{drive, FakeServer};
    use clinic_core::endpoint::DEFAULT_ENDPOINT_BASE;

    fn clinic_server() -> FakeServer {
        FakeServer::new()
            .with(
                "/ajax/load-states/?country_id=1",
                r#"[{"id": 10, "name": "Cusco"}, {"id": 11, "name": "Lima"}]"#,
            )
            .with(
                "/ajax/load-cities/?state_id=11",
                r#"[{"id": 110, "name": "Miraflores"}]"#,
            )
            .with(
                "/ajax/load-clinics/?procedure_id=4",
                r#"[{"id": 2, "name": "Clinica Central"}, {"id": 3, "name": "Clinica Norte"}]"#,
            )
            .with(
                "/ajax/load-doctors/?procedure_id=4&clinic_id=2",
                r#"[{"id": 8, "name": "Ana Quispe"}]"#,
            )
            .with(
                "/ajax/load-doctors/?clinic_id=2",
                r#"[{"id": 8, "name": "Ana Quispe"}, {"id": 9, "name": "Luis Rojas"}]"#,
            )
            .with(
                "/ajax/load-timeslots/?doctor_id=8&clinic_id=2",
                r#"[{"start": "2024-01-01T09:00:00", "end": "2024-01-01T10:00:00"},
                    {"start": "2024-01-01T10:00:00", "end": "2024-01-01T11:00:00"}]"#,
            )
            .with(
                "/ajax/load-procedures/?doctor_id=8",
                r#"[{"id": 4, "name": "Cleaning"}, {"id": 5, "name": "Extraction"}]"#,
            )
    }

    // ───────────────────── Locations ─────────────────────

    #[test]
    fn clearing_country_resets_state_and_city_to_placeholders() {
        let mut chain = locations(DEFAULT_ENDPOINT_BASE);
        let requests = chain.change(0, "1").unwrap();
        drive(&mut chain, requests, &clinic_server());
        let requests = chain.change(1, "11").unwrap();
        drive(&mut chain, requests, &clinic_server());
        assert!(chain.fields()[2].is_enabled());

        chain.change(0, "").unwrap();

        let state = chain.fields()[1].options();
        let city = chain.fields()[2].options();
        assert_eq!(state.len(), 1);
        assert_eq!(state[0].label, "Select a country first");
        assert_eq!(city.len(), 1);
        assert_eq!(city[0].label, "Select a state first");
        assert!(!chain.fields()[1].is_enabled());
        assert!(!chain.fields()[2].is_enabled());
    }

    // ───────────────────── Appointment ─────────────────────

    #[test]
    fn appointment_doctors_are_keyed_by_procedure_and_clinic() {
        let mut chain = appointment(DEFAULT_ENDPOINT_BASE);
        let requests = chain.change(0, "4").unwrap();
        assert_eq!(requests[0].url, "/ajax/load-clinics/?procedure_id=4");
        drive(&mut chain, requests, &clinic_server());

        let requests = chain.change(1, "2").unwrap();
        assert_eq!(requests[0].url, "/ajax/load-doctors/?procedure_id=4&clinic_id=2");
        drive(&mut chain, requests, &clinic_server());

        let requests = chain.change(2, "8").unwrap();
        assert_eq!(requests[0].url, "/ajax/load-timeslots/?doctor_id=8&clinic_id=2");
        drive(&mut chain, requests, &clinic_server());

        let slots = chain.fields()[3].options();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].label, "Select a time slot");
        assert_eq!(slots[1].value, "2024-01-01T09:00:00");
        assert_eq!(slots[1].label, "2024-01-01T09:00:00 - 2024-01-01T10:00:00");
    }

    #[test]
    fn appointment_cleared_procedure_empties_everything() {
        let mut chain = appointment(DEFAULT_ENDPOINT_BASE);
        let requests = chain.change(0, "4").unwrap();
        drive(&mut chain, requests, &clinic_server());
        let requests = chain.change(1, "2").unwrap();
        drive(&mut chain, requests, &clinic_server());

        chain.change(0, "").unwrap();
        for field in &chain.fields()[1..] {
            assert!(!field.is_enabled());
            // no placeholder on this form: the select is simply emptied
            assert!(field.options().is_empty());
        }
    }

    #[test]
    fn appointment_failed_doctor_load_keeps_rest_inert() {
        let mut chain = appointment(DEFAULT_ENDPOINT_BASE);
        let requests = chain.change(0, "4").unwrap();
        drive(&mut chain, requests, &clinic_server());
        let requests = chain.change(1, "3").unwrap();
        // nothing canned for clinic 3
        drive(&mut chain, requests, &clinic_server());

        assert!(!chain.fields()[2].is_enabled());
        assert!(chain.fields()[2].choices().is_empty());
        assert!(!chain.fields()[3].is_enabled());
    }

    // ───────────────────── Visit ─────────────────────

    #[test]
    fn visit_doctor_change_loads_slots_and_procedures_independently() {
        let mut chain = visit(DEFAULT_ENDPOINT_BASE);
        let requests = chain.change(0, "2").unwrap();
        assert_eq!(requests[0].url, "/ajax/load-doctors/?clinic_id=2");
        drive(&mut chain, requests, &clinic_server());

        let requests = chain.change(1, "8").unwrap();
        let urls: Vec<&str> = requests.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "/ajax/load-timeslots/?doctor_id=8&clinic_id=2",
                "/ajax/load-procedures/?doctor_id=8",
            ]
        );

        // procedures fail, timeslots succeed
        let server = clinic_server();
        chain.apply_failure(&requests[1], &anyhow::anyhow!("500"));
        chain.apply_records(&requests[0], server.answer(&requests[0]).unwrap());

        assert!(chain.fields()[2].is_enabled());
        assert_eq!(chain.fields()[2].choices().len(), 2);
        assert!(chain.checklist(0).unwrap().choices().is_empty());
    }

    #[test]
    fn visit_procedures_render_as_checkboxes() {
        let mut chain = visit(DEFAULT_ENDPOINT_BASE);
        let requests = chain.change(0, "2").unwrap();
        drive(&mut chain, requests, &clinic_server());
        let requests = chain.change(1, "8").unwrap();
        drive(&mut chain, requests, &clinic_server());

        let procedures = chain.checklist(0).unwrap();
        assert_eq!(procedures.input_name, "procedures_done");
        assert_eq!(procedures.choices().len(), 2);
        assert!(procedures.checked().is_empty());

        chain.toggle(0, "5", true).unwrap();
        assert!(chain.checklist(0).unwrap().is_checked("5"));
        chain.toggle(0, "5", false).unwrap();
        assert!(!chain.checklist(0).unwrap().is_checked("5"));
    }

    #[test]
    fn visit_ticking_a_procedure_not_offered_is_ignored() {
        let mut chain = visit(DEFAULT_ENDPOINT_BASE);
        let requests = chain.change(0, "2").unwrap();
        drive(&mut chain, requests, &clinic_server());
        // no procedures loaded yet
        chain.toggle(0, "4", true).unwrap();
        assert!(chain.checklist(0).unwrap().checked().is_empty());

        let requests = chain.change(1, "8").unwrap();
        drive(&mut chain, requests, &clinic_server());
        chain.toggle(0, "77", true).unwrap();
        chain.toggle(0, "4", true).unwrap();
        let checked: Vec<&str> = chain
            .checklist(0)
            .unwrap()
            .checked()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(checked, vec!["4"]);
    }

    #[test]
    fn visit_clinic_cleared_empties_procedures() {
        let mut chain = visit(DEFAULT_ENDPOINT_BASE);
        let requests = chain.change(0, "2").unwrap();
        drive(&mut chain, requests, &clinic_server());
        let requests = chain.change(1, "8").unwrap();
        drive(&mut chain, requests, &clinic_server());
        chain.toggle(0, "4", true).unwrap();

        chain.change(0, "").unwrap();
        let procedures = chain.checklist(0).unwrap();
        assert!(procedures.choices().is_empty());
        assert!(procedures.checked().is_empty());
        assert!(!chain.fields()[1].is_enabled());
        assert!(!chain.fields()[2].is_enabled());
    }

    #[test]
    fn visit_replay_restores_doctor_slot_and_checked_procedures() {
        let mut chain = visit(DEFAULT_ENDPOINT_BASE);
        let preselection = Preselection::new()
            .with_value(dom::CLINIC, "2")
            .with_value(dom::DOCTOR, "8")
            .with_value(dom::VISIT_DATE, "2024-01-01T10:00:00")
            .with_checked(dom::PROCEDURES_CONTAINER, ["5", "77"]);

        let requests = chain.replay(&preselection);
        drive(&mut chain, requests, &clinic_server());

        assert_eq!(chain.fields()[1].value(), Some("8"));
        assert_eq!(chain.fields()[2].value(), Some("2024-01-01T10:00:00"));
        let procedures = chain.checklist(0).unwrap();
        // 77 is not offered by the doctor any more
        assert_eq!(procedures.checked().iter().collect::<Vec<_>>(), vec!["5"]);
    }

    // ───────────────────── All Chains ─────────────────────

    #[test]
    fn every_preset_blocks_all_but_the_root() {
        for chain in [
            locations(DEFAULT_ENDPOINT_BASE),
            appointment(DEFAULT_ENDPOINT_BASE),
            visit(DEFAULT_ENDPOINT_BASE),
        ] {
            assert!(chain.fields()[0].is_enabled());
            for field in &chain.fields()[1..] {
                assert!(!field.is_enabled(), "{} should start disabled", field.dom_id);
                assert!(field.choices().is_empty());
            }
        }
    }

    #[test]
    fn presets_honor_custom_endpoint_base() {
        let mut chain = locations("/clinic/ajax/");
        let requests = chain.change(0, "1").unwrap();
        assert_eq!(requests[0].url, "/clinic/ajax/load-states/?country_id=1");
    }
}
