use super::*;
use shared::domain::Gender;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn employee(id: i64, name: &str) -> Employee {
    Employee {
        id: EmployeeId(id),
        name: name.to_string(),
        age: 36,
        dob: date(1990, 6, 15),
        gender: Gender::Other,
        department: "Finance".to_string(),
    }
}

fn loaded_state() -> DirectoryState {
    let mut state = DirectoryState::new();
    state.apply_loaded(vec![employee(5, "Cy"), employee(7, "Di")]);
    state
}

#[test]
fn starts_empty_with_both_dialogs_closed() {
    let state = DirectoryState::new();
    assert!(state.employees().is_empty());
    assert!(!state.form_open());
    assert!(!state.delete_open());
    assert_eq!(state.editing_id(), None);
}

#[test]
fn apply_loaded_replaces_the_whole_list() {
    let mut state = loaded_state();
    state.apply_loaded(vec![employee(9, "Ed")]);
    let ids: Vec<_> = state.employees().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EmployeeId(9)]);
}

#[test]
fn create_dialog_starts_from_a_blank_draft() {
    let mut state = loaded_state();
    state.open_edit_dialog(&employee(5, "Cy"));
    state.close_dialog();
    state.open_create_dialog();

    assert!(state.form_open());
    assert!(!state.is_editing());
    assert_eq!(state.draft(), &EmployeeDraft::default());
}

#[test]
fn edit_dialog_copies_the_selected_record() {
    let mut state = loaded_state();
    let record = employee(5, "Cy");
    state.open_edit_dialog(&record);

    assert!(state.form_open());
    assert_eq!(state.editing_id(), Some(EmployeeId(5)));
    assert_eq!(state.draft().name, "Cy");
    assert_eq!(state.draft().dob, Some(date(1990, 6, 15)));
    assert_eq!(state.draft().age, Some(36));
    assert_eq!(state.draft().gender, Some(Gender::Other));
}

#[test]
fn changing_dob_sets_age_from_years_only() {
    let mut state = DirectoryState::new();
    state.open_create_dialog();
    let today = date(2026, 1, 2);

    state.change_field(FieldChange::DateOfBirth(Some(date(2000, 12, 31))), today);
    assert_eq!(state.draft().age, Some(26));

    state.change_field(FieldChange::DateOfBirth(None), today);
    assert_eq!(state.draft().age, None);
}

#[test]
fn field_change_touches_only_that_field() {
    let mut state = loaded_state();
    state.open_edit_dialog(&employee(5, "Cy"));
    let change = FieldChange::Department("Legal".to_string());
    state.change_field(change, date(2026, 1, 1));

    let draft = state.draft();
    assert_eq!(draft.department, "Legal");
    assert_eq!(draft.name, "Cy");
    assert_eq!(draft.age, Some(36));
}

#[test]
fn closing_the_dialog_discards_the_draft_and_keeps_the_list() {
    let mut state = loaded_state();
    let before = state.employees().to_vec();

    state.open_edit_dialog(&employee(5, "Cy"));
    state.change_field(FieldChange::Name("Changed".to_string()), date(2026, 1, 1));
    state.close_dialog();

    assert!(!state.form_open());
    assert_eq!(state.editing_id(), None);
    assert_eq!(state.draft(), &EmployeeDraft::default());
    assert_eq!(state.employees(), before.as_slice());
}

#[test]
fn prepare_submit_picks_create_or_update_from_the_mode() {
    let today = date(2026, 5, 1);
    let mut state = DirectoryState::new();
    state.open_create_dialog();
    state.change_field(FieldChange::Name("Ann".to_string()), today);
    state.change_field(FieldChange::DateOfBirth(Some(date(2000, 1, 1))), today);
    state.change_field(FieldChange::Gender(Gender::Female), today);
    state.change_field(FieldChange::Department("Eng".to_string()), today);

    let request = state.prepare_submit().expect("complete draft");
    assert_eq!(request.method(), "POST");
    assert_eq!(request.payload().age, 26);

    state.open_edit_dialog(&employee(5, "Cy"));
    match state.prepare_submit().expect("complete draft") {
        SubmitRequest::Update { id, payload } => {
            assert_eq!(id, EmployeeId(5));
            assert_eq!(payload.name, "Cy");
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn prepare_submit_rejects_a_draft_without_dob_or_gender() {
    let today = date(2026, 5, 1);
    let mut state = DirectoryState::new();
    state.open_create_dialog();
    state.change_field(FieldChange::Name("Ann".to_string()), today);
    assert_eq!(state.prepare_submit(), Err(DraftError::MissingDateOfBirth));

    state.change_field(FieldChange::DateOfBirth(Some(date(2000, 1, 1))), today);
    assert_eq!(state.prepare_submit(), Err(DraftError::MissingGender));
}

#[test]
fn submit_success_closes_the_dialog_but_leaves_the_list_for_resync() {
    let mut state = loaded_state();
    state.open_edit_dialog(&employee(5, "Cy"));

    let _resync = state.submit_succeeded();

    assert!(!state.form_open());
    assert_eq!(state.employees().len(), 2);
}

#[test]
fn delete_target_exists_only_while_the_prompt_is_open() {
    let mut state = loaded_state();
    assert_eq!(state.delete_target(), None);

    state.open_delete_prompt(&employee(7, "Di"));
    assert!(state.delete_open());
    assert_eq!(state.delete_target(), Some(EmployeeId(7)));
    assert_eq!(
        state.delete_candidate().map(|e| e.name.as_str()),
        Some("Di")
    );

    state.close_delete_prompt();
    assert_eq!(state.delete_target(), None);
    assert!(state.delete_candidate().is_none());
}

#[test]
fn dialogs_are_independent() {
    let mut state = loaded_state();
    state.open_create_dialog();
    state.open_delete_prompt(&employee(7, "Di"));

    let _resync = state.delete_succeeded();
    assert!(state.form_open());
    assert!(!state.delete_open());
}
