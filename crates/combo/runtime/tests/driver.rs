use combo_core::{ActionId, ComboEdge, ComboGraph, ComboNode, ComboState, GraphIssue, OutcomeKind};
use combo_runtime::{
    ActionDispatcher, ActorId, ComboActor, ComboDriver, InputDisposition, OverflowPolicy,
    RuntimeConfig, RuntimeError,
};

const NODES: [ComboNode; 6] = [
    ComboNode::new(0, 0, 2),
    ComboNode::new(100, 2, 2),
    ComboNode::new(200, 4, 1),
    ComboNode::leaf(101),
    ComboNode::leaf(102),
    ComboNode::leaf(201),
];

const EDGES: [ComboEdge; 5] = [
    ComboEdge::new(1, 1),
    ComboEdge::new(2, 2),
    ComboEdge::new(1, 3),
    ComboEdge::new(2, 4),
    ComboEdge::new(2, 5),
];

#[derive(Default)]
struct RecordingDispatcher {
    dispatched: Vec<(ActorId, ActionId, usize)>,
    resets: Vec<(ActorId, ActionId)>,
}

impl ActionDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, actor: ActorId, action: ActionId, node: usize) {
        self.dispatched.push((actor, action, node));
    }

    fn on_soft_reset(&mut self, actor: ActorId, idle_action: ActionId) {
        self.resets.push((actor, idle_action));
    }
}

fn driver(config: RuntimeConfig) -> ComboDriver<'static> {
    ComboDriver::new(ComboGraph::new(&NODES, &EDGES), config).unwrap()
}

#[test]
fn committed_actions_reach_the_dispatcher() {
    let driver = driver(RuntimeConfig::default());
    let mut actor = ComboActor::<8>::new(ActorId(1));
    let mut dispatcher = RecordingDispatcher::default();

    driver.push_input(&mut actor, 1).unwrap();
    driver.push_input(&mut actor, 2).unwrap();

    assert!(driver.step(&mut actor, &mut dispatcher).is_success());
    // Effect still playing: second input waits.
    assert_eq!(driver.step(&mut actor, &mut dispatcher).kind(), OutcomeKind::Busy);
    actor.finish_action();
    assert!(driver.step(&mut actor, &mut dispatcher).is_success());

    assert_eq!(
        dispatcher.dispatched,
        vec![
            (ActorId(1), ActionId(100), 1),
            (ActorId(1), ActionId(102), 4)
        ]
    );
    assert!(dispatcher.resets.is_empty());
}

#[test]
fn soft_resets_are_reported_with_idle_action() {
    let driver = driver(RuntimeConfig::default());
    let mut actor = ComboActor::<8>::with_state(
        ActorId(4),
        ComboState {
            current_node: 3,
            action_busy: false,
        },
    );
    let mut dispatcher = RecordingDispatcher::default();
    driver.push_input(&mut actor, 1).unwrap();

    let outcome = driver.step(&mut actor, &mut dispatcher);

    assert_eq!(outcome.into_pair(), (false, 0));
    assert_eq!(dispatcher.resets, vec![(ActorId(4), ActionId(0))]);
    assert!(actor.state().is_idle());
}

#[test]
fn step_all_resolves_one_input_per_actor() {
    let driver = driver(RuntimeConfig::default());
    let mut actors: Vec<ComboActor<8>> = (0..3).map(|i| ComboActor::new(ActorId(i))).collect();
    driver.push_input(&mut actors[0], 1).unwrap();
    driver.push_input(&mut actors[0], 1).unwrap();
    driver.push_input(&mut actors[1], 7).unwrap();

    let mut dispatched = Vec::new();
    let mut record =
        |actor: ActorId, action: ActionId, _node: usize| dispatched.push((actor, action));

    let summary = driver.step_all(&mut actors, &mut record);

    assert_eq!(summary.count(OutcomeKind::Committed), 1);
    assert_eq!(summary.count(OutcomeKind::NoMatch), 1);
    assert_eq!(summary.count(OutcomeKind::BufferEmpty), 1);
    assert_eq!(summary.consumed(), 2);
    assert_eq!(actors[0].buffer().len(), 1);

    let summary = driver.step_all(&mut actors, &mut record);
    assert_eq!(summary.count(OutcomeKind::Busy), 1);
    assert_eq!(summary.count(OutcomeKind::BufferEmpty), 2);

    assert_eq!(dispatched, vec![(ActorId(0), ActionId(100))]);
}

#[test]
fn overflow_policy_comes_from_config() {
    let dropping = driver(RuntimeConfig::default().with_overflow(OverflowPolicy::DropOldest));
    let mut actor = ComboActor::<2>::new(ActorId(0));

    dropping.push_input(&mut actor, 1).unwrap();
    dropping.push_input(&mut actor, 2).unwrap();
    assert_eq!(
        dropping.push_input(&mut actor, 2).unwrap(),
        InputDisposition::ReplacedOldest { dropped: 1 }
    );

    let rejecting = driver(RuntimeConfig::default());
    let err = rejecting.push_input(&mut actor, 9).unwrap_err();
    assert!(matches!(err, RuntimeError::InputRejected { .. }));
}

#[test]
fn busy_actor_is_never_unblocked_by_the_driver() {
    let driver = driver(RuntimeConfig::default().with_busy_warn_steps(3));
    let mut actor = ComboActor::<8>::new(ActorId(0));
    let mut dispatcher = RecordingDispatcher::default();
    driver.push_input(&mut actor, 1).unwrap();
    driver.push_input(&mut actor, 1).unwrap();

    driver.step(&mut actor, &mut dispatcher);
    for _ in 0..10 {
        assert_eq!(driver.step(&mut actor, &mut dispatcher).kind(), OutcomeKind::Busy);
    }

    assert_eq!(actor.busy_steps(), 10);
    assert_eq!(actor.buffer().len(), 1);
    assert_eq!(dispatcher.dispatched.len(), 1);
}

#[test]
fn corrupt_graph_is_tolerated_unless_strict() {
    let nodes = [ComboNode::new(0, 0, 1), ComboNode::leaf(50)];
    let edges = [ComboEdge::new(1, 12)];
    let graph = ComboGraph::new(&nodes, &edges);

    let lenient = ComboDriver::new(graph, RuntimeConfig::default()).unwrap();
    let mut actor = ComboActor::<8>::new(ActorId(0));
    let mut dispatcher = RecordingDispatcher::default();
    lenient.push_input(&mut actor, 1).unwrap();
    assert_eq!(
        lenient.step(&mut actor, &mut dispatcher).kind(),
        OutcomeKind::CorruptTarget
    );

    let strict = RuntimeConfig::default().with_strict_graph(true);
    let err = ComboDriver::new(graph, strict).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::GraphRejected {
            total: 1,
            first: GraphIssue::TargetOutOfRange {
                node: 0,
                edge: 0,
                target: 12,
                node_count: 2,
            },
        }
    );
}

#[test]
fn empty_graph_driver_is_inert() {
    let driver = ComboDriver::new(ComboGraph::empty(), RuntimeConfig::default()).unwrap();
    let mut actor = ComboActor::<8>::new(ActorId(0));
    let mut dispatcher = RecordingDispatcher::default();
    driver.push_input(&mut actor, 1).unwrap();

    assert_eq!(driver.step(&mut actor, &mut dispatcher).into_pair(), (false, -1));
    assert_eq!(actor.buffer().len(), 1);
}
