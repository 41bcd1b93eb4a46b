//! End-to-end session flows through the public API.

use meteo_core::{
    DeviceRegistry, Error, IndicatorState, Session, SessionEvent, SessionState, display,
};
use meteo_types::DeviceDescriptor;

#[test]
fn full_monitoring_cycle() {
    let mut session = Session::builder().seed(1234).build();
    let mut events = session.subscribe();

    // Connect populates the display immediately
    let first = session.connect(Some(1)).expect("connect");
    assert_eq!(session.state(), SessionState::Connected);
    assert_eq!(
        display::connection_status(session.state()),
        "Connected"
    );
    let (temp_text, hum_text) = display::format_reading(&first);
    assert!(temp_text.ends_with(" °C"));
    assert!(hum_text.ends_with(" %"));

    // A few poll cycles with selective recording
    let mut recorded = Vec::new();
    for tick in 0..6 {
        let reading = session.poll_tick().expect("tick while connected");
        if tick % 2 == 0 {
            session.record().expect("record while connected");
            recorded.push(reading);
        }
    }
    assert_eq!(session.history().len(), 3);

    // History is most recent first
    let history = session.history().to_vec();
    recorded.reverse();
    assert_eq!(history, recorded);

    // Disconnect stops polling and neutralizes the indicators
    session.disconnect();
    assert!(session.poll_tick().is_none());
    assert_eq!(session.indicators().temperature, IndicatorState::Neutral);
    assert_eq!(session.indicators().humidity, IndicatorState::Neutral);
    assert_eq!(
        display::connection_status(session.state()),
        "Not connected"
    );

    // History survives disconnect; clearing empties it
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.clear_history(), 3);
    assert!(session.history().is_empty());

    // The event stream saw every operation
    let mut connected = 0;
    let mut updated = 0;
    let mut recorded_events = 0;
    let mut disconnected = 0;
    let mut cleared = 0;
    while let Ok(event) = events.try_recv() {
        match event {
            SessionEvent::Connected { .. } => connected += 1,
            SessionEvent::ReadingUpdated { .. } => updated += 1,
            SessionEvent::Recorded { .. } => recorded_events += 1,
            SessionEvent::Disconnected => disconnected += 1,
            SessionEvent::HistoryCleared { removed } => {
                cleared += 1;
                assert_eq!(removed, 3);
            }
            _ => {}
        }
    }
    assert_eq!(connected, 1);
    assert_eq!(updated, 7); // 1 on connect + 6 ticks
    assert_eq!(recorded_events, 3);
    assert_eq!(disconnected, 1);
    assert_eq!(cleared, 1);
}

#[test]
fn errors_leave_state_untouched() {
    let mut session = Session::builder().seed(5).build();

    assert_eq!(session.connect(None), Err(Error::NoDeviceSelected));
    assert_eq!(session.connect(Some(42)), Err(Error::UnknownDevice(42)));
    assert_eq!(session.state(), SessionState::Disconnected);
    assert!(session.current_reading().is_none());

    assert_eq!(session.record(), Err(Error::NotConnected));
    assert!(session.history().is_empty());
}

#[test]
fn custom_registry_drives_selection() {
    let registry = DeviceRegistry::new(vec![
        DeviceDescriptor::new(10, "Rooftop sensor"),
        DeviceDescriptor::new(11, "Basement sensor"),
    ]);
    let mut session = Session::builder().seed(9).registry(registry).build();

    assert_eq!(session.devices().len(), 2);
    assert_eq!(session.connect(Some(1)), Err(Error::UnknownDevice(1)));

    session.connect(Some(11)).expect("connect");
    assert_eq!(session.device().map(|d| d.name.as_str()), Some("Basement sensor"));
}
