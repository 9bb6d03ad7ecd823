use ring::{Polynomial, Ring, RingParams};
use routing::codec::extract_message;
use routing::{Identity, RoutingWeights};
use sampling::source::Source;
use sheaf::{GluingConstraint, Patch, RoutingProblem, SheafRouter};

/// Zero-position weights make a patch act as the identity on routed
/// traffic, so end-to-end values stay integer-exact.
fn relay_patch(id: &str) -> Patch {
    Patch::create(id, RoutingWeights::from_rows(Vec::new()))
}

#[test]
fn alice_routes_hello_to_bob() {
    let ring: Ring = Ring::new(RingParams::small());
    let mut source: Source = Source::new([17u8; 32]);

    let mut alice: Identity = Identity::create(&ring, &mut source, "alice", "hunter2").unwrap();
    let bob: Identity = Identity::create(&ring, &mut source, "bob", "swordfish").unwrap();
    alice
        .add_contact("bob", bob.polynomial_id().clone())
        .unwrap();

    let message: Polynomial = ring.encode(&[72, 101, 108, 108, 111]).unwrap();
    let dest: Polynomial = alice.lookup_contact_polynomial("bob").unwrap();
    // Relay patches pass traffic through unchanged, so the agreed boundary
    // for the overlap is exactly message + destination mask.
    let boundary: Polynomial = ring.add(&message, &dest);

    let problem: RoutingProblem = RoutingProblem {
        patches: vec![relay_patch("west"), relay_patch("east")],
        gluings: vec![GluingConstraint::continuity("west", "east", boundary)],
        examples: Vec::new(),
    };
    let mut router: SheafRouter = SheafRouter::create(&ring, problem).unwrap();
    let result = router.learn_routing().unwrap();
    assert!(result.obstruction.is_finite());
    assert_eq!(result.patch_weights.len(), 2);

    let routed: Polynomial = router
        .route(&message, alice.polynomial_id(), &dest)
        .unwrap();

    let received: Polynomial = extract_message(&ring, &routed, bob.polynomial_id());
    let decoded: Vec<u64> = received.decode();
    assert_eq!(&decoded[..5], &[72, 101, 108, 108, 111]);
    assert!(decoded[5..].iter().all(|&c| c == 0));
    assert_eq!(
        String::from_utf8(decoded[..5].iter().map(|&c| c as u8).collect()).unwrap(),
        "Hello"
    );
}

#[test]
fn eavesdropper_with_wrong_id_reads_noise() {
    let ring: Ring = Ring::new(RingParams::small());
    let mut source: Source = Source::new([99u8; 32]);

    let bob: Identity = Identity::create(&ring, &mut source, "bob", "swordfish").unwrap();
    let eve: Identity = Identity::create(&ring, &mut source, "eve", "letmein").unwrap();

    let message: Polynomial = ring.encode(&[42, 42, 42]).unwrap();
    let problem: RoutingProblem = RoutingProblem {
        patches: vec![relay_patch("core")],
        gluings: Vec::new(),
        examples: Vec::new(),
    };
    let mut router: SheafRouter = SheafRouter::create(&ring, problem).unwrap();
    router.learn_routing().unwrap();

    let routed: Polynomial = router
        .route(&message, eve.polynomial_id(), bob.polynomial_id())
        .unwrap();

    assert_eq!(extract_message(&ring, &routed, bob.polynomial_id()), message);
    assert_ne!(extract_message(&ring, &routed, eve.polynomial_id()), message);
}
