//! Selection state tests
//!
//! Walks the selection and confirmation rules through the built-in
//! terminal commands and API requests.

use folio::content::{ApiRequest, Profile, TerminalCommand};
use folio::selection::{
    resolve_active, ConfirmableSelection, DisplayState, SelectableItem, Selection, SelectionError,
};

fn commands() -> Selection<TerminalCommand> {
    Selection::new(Profile::builtin().terminal_commands).expect("built-in commands")
}

fn requests() -> ConfirmableSelection<ApiRequest> {
    ConfirmableSelection::new(Profile::builtin().api_requests).expect("built-in requests")
}

#[test]
fn test_first_item_is_active_initially() {
    let commands = commands();
    assert_eq!(commands.active_id(), "whoami");
    assert_eq!(commands.active().command, "whoami");
    assert!(commands.is_active("whoami"));
    assert!(!commands.is_active("stack"));
}

#[test]
fn test_select_command_changes_output() {
    let mut commands = commands();
    assert!(commands.select("stack"));
    assert_eq!(commands.active().command, "stack --core");
    assert_eq!(
        commands.active().output[0],
        "Java 8 & 17 | Spring Boot | Micronaut"
    );
}

#[test]
fn test_select_is_idempotent() {
    let mut commands = commands();
    assert!(commands.select("status"));
    let before = commands.clone();
    assert!(!commands.select("status"));
    assert_eq!(commands.active_id(), before.active_id());
}

#[test]
fn test_select_unknown_id_is_ignored() {
    let mut commands = commands();
    commands.select("contact");
    assert!(!commands.select("rm -rf"));
    assert_eq!(commands.active_id(), "contact");
}

#[test]
fn test_send_then_switch_hides_response() {
    let mut requests = requests();
    assert_eq!(requests.state(), DisplayState::Idle);
    assert!(requests.confirmed_active().is_none());

    assert!(requests.confirm_active());
    assert_eq!(requests.state(), DisplayState::Confirmed);
    let sent = requests.confirmed_active().expect("response visible");
    assert_eq!(sent.response.status, "200 OK");

    assert!(requests.select("focus"));
    assert_eq!(requests.state(), DisplayState::Idle);
    assert!(requests.confirmed_active().is_none());
    assert_eq!(requests.confirmed_id(), None);
}

#[test]
fn test_switching_back_does_not_restore_response() {
    let mut requests = requests();
    requests.confirm_active();
    requests.select("focus");
    requests.select("profile");
    assert_eq!(requests.state(), DisplayState::Idle);
}

#[test]
fn test_resend_is_idempotent() {
    let mut requests = requests();
    requests.select("focus");
    requests.confirm_active();
    requests.confirm_active();
    assert_eq!(requests.confirmed_id(), Some("focus"));
    assert_eq!(
        requests.confirmed_active().map(|r| r.response.status.as_str()),
        Some("202 Accepted")
    );
}

#[test]
fn test_reselecting_active_keeps_response() {
    let mut requests = requests();
    requests.confirm_active();
    assert!(!requests.select("profile"));
    assert_eq!(requests.state(), DisplayState::Confirmed);
}

#[test]
fn test_resolve_active_falls_back_to_first_item() {
    let commands = Profile::builtin().terminal_commands;
    let active = resolve_active(&commands, "missing").expect("non-empty list");
    assert_eq!(active.id(), "whoami");

    let empty: Vec<TerminalCommand> = Vec::new();
    assert!(resolve_active(&empty, "whoami").is_none());
}

#[test]
fn test_empty_list_is_rejected() {
    let result = Selection::<TerminalCommand>::new(Vec::new());
    assert!(matches!(result, Err(SelectionError::Empty)));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut commands = Profile::builtin().terminal_commands;
    commands.push(commands[0].clone());
    let result = Selection::new(commands);
    assert_eq!(
        result.err(),
        Some(SelectionError::DuplicateId("whoami".to_string()))
    );
}

#[test]
fn test_next_and_previous_wrap() {
    let mut commands = commands();
    commands.previous();
    assert_eq!(commands.active_id(), "contact");
    commands.next();
    assert_eq!(commands.active_id(), "whoami");
}
