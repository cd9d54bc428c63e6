use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use fxhash::FxHashMap;
use kanjy_application::{EventSession, KanjyConfig};
use kanjy_domain::{
    CandidateSchedule, EventId, Money, RoleAssignment, RsvpResponse, RsvpStatus, StandardRole,
};

fn jst(day: u32, hour: u32) -> DateTime<Utc> {
    FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 12, day, hour, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn response(name: &str, status: RsvpStatus, available: &[DateTime<Utc>]) -> RsvpResponse {
    RsvpResponse {
        participant_name: name.to_string(),
        status,
        available_dates: available.to_vec(),
        maybe_dates: Vec::new(),
        responded_at: jst(1, 12),
        comment: None,
    }
}

#[test]
fn poll_confirm_split_and_collect() {
    let config = KanjyConfig::from_lookup(|key| match key {
        "KANJY_ROLE_MULTIPLIERS" => Some("director=2".to_string()),
        _ => None,
    })
    .unwrap();
    let schedule = CandidateSchedule::new("忘年会", [jst(20, 19), jst(27, 19)]);
    let mut session = EventSession::new(schedule, &config);

    let event = EventId::new("bonenkai-2024");
    let mut store: FxHashMap<EventId, Vec<RsvpResponse>> = FxHashMap::default();
    store.insert(
        event.clone(),
        vec![
            response("部長", RsvpStatus::Attending, &[jst(20, 10), jst(27, 10)]),
            response("佐藤", RsvpStatus::Attending, &[jst(20, 22)]),
            response("鈴木", RsvpStatus::Maybe, &[jst(20, 19)]),
            response("高橋", RsvpStatus::Attending, &[jst(27, 19)]),
        ],
    );

    assert_eq!(session.refresh_responses(&store, &event).unwrap(), 4);
    assert_eq!(session.most_voted_date(), Some(jst(20, 19)));

    session.confirm_date(jst(20, 19)).unwrap();
    let names: Vec<&str> = session.roster().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["部長", "佐藤"]);

    let boss = session.roster()[0].id;
    session
        .set_role(boss, RoleAssignment::standard(StandardRole::Director))
        .unwrap();
    session.set_total_text("9,000円");

    let amounts: Vec<Money> = session.shares().into_iter().map(|s| s.amount).collect();
    assert_eq!(amounts, vec![Money::from_u64(6000), Money::from_u64(3000)]);
    assert_eq!(session.split_summary().rounding_residue, 0);

    session.toggle_collected(boss).unwrap();
    let status = session.collection_status();
    assert_eq!(status.collected_amount, Money::from_u64(6000));
    assert_eq!(status.outstanding_amount, Money::from_u64(3000));
}
