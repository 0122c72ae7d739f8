use crate::{AppCommand, AppError, Console};

use std::io::Cursor;

use tokio::sync::mpsc;

fn drain(command_rx: &mut mpsc::Receiver<AppCommand>) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = command_rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// WHAT: Valid lines are forwarded in order, invalid and blank lines skipped
/// WHY: A typo must not reach the session or stop the console
#[test]
fn given_mixed_input_when_running_console_then_valid_commands_forwarded_in_order() {
    // Given: Input with a typo and a blank line
    let (command_tx, mut command_rx) = mpsc::channel(32);
    let console = Console::new(command_tx);
    let input = Cursor::new("start\nrecrod\n\nrecord\nstop\n");

    // When: Running to end of input
    console.run(input).unwrap();

    // Then: Known commands in order, followed by the shutdown for EOF
    assert_eq!(
        drain(&mut command_rx),
        vec![
            AppCommand::StartTracking,
            AppCommand::ToggleRecording,
            AppCommand::StopTracking,
            AppCommand::Shutdown,
        ]
    );
}

/// WHAT: Reading stops at quit
/// WHY: Lines after quit belong to whatever runs next in the shell
#[test]
fn given_quit_line_when_running_console_then_later_lines_ignored() {
    // Given: Input continuing after quit
    let (command_tx, mut command_rx) = mpsc::channel(32);
    let console = Console::new(command_tx);

    // When: Running the console
    console.run(Cursor::new("status\nquit\nstart\n")).unwrap();

    // Then: Exactly one shutdown and nothing after it
    assert_eq!(
        drain(&mut command_rx),
        vec![AppCommand::ShowStatus, AppCommand::Shutdown]
    );
}

/// WHAT: A closed application channel ends the console with an error
/// WHY: The console thread must not spin once nobody listens
#[test]
fn given_closed_channel_when_forwarding_then_channel_send_failed() {
    // Given: The receiving side is gone
    let (command_tx, command_rx) = mpsc::channel(1);
    drop(command_rx);
    let console = Console::new(command_tx);

    // When: A command is read
    let result = console.run(Cursor::new("start\n"));

    // Then: Reported as a failed send
    assert!(matches!(result, Err(AppError::ChannelSendFailed { .. })));
}
