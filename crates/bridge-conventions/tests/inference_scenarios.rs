use bridge_conventions::conventions::{builtin_registry, STAYMAN_ID};
use bridge_conventions::{
    ChainProvider, ConventionProvider, ConventionRegistry, InferenceConfig, InferenceEngine,
    InferenceProvider, InferredHoldings, NaturalProvider,
};
use bridge_core::{Auction, Position, Suit};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct Scenario {
    dealer: Position,
    calls: String,
    observer: Position,
    own: Vec<String>,
    opponents: Vec<String>,
    expect: IndexMap<Position, Expectation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Expectation {
    hcp: Option<[u8; 2]>,
    hcp_min_at_least: Option<u8>,
    hcp_min_below: Option<u8>,
    balanced: Option<bool>,
    suits: IndexMap<Suit, [u8; 2]>,
}

fn provider(names: &[String], registry: &Arc<dyn ConventionRegistry>) -> Arc<dyn InferenceProvider> {
    let mut providers: Vec<Arc<dyn InferenceProvider>> = names
        .iter()
        .map(|name| -> Arc<dyn InferenceProvider> {
            match name.as_str() {
                "natural" => Arc::new(NaturalProvider::standard().unwrap()),
                STAYMAN_ID => Arc::new(ConventionProvider::new(STAYMAN_ID, registry.clone())),
                other => panic!("unknown provider '{}'", other),
            }
        })
        .collect();
    if providers.len() == 1 {
        providers.remove(0)
    } else {
        Arc::new(ChainProvider::new(providers))
    }
}

fn check(seat: Position, holdings: &InferredHoldings, expect: &Expectation) -> Vec<String> {
    let mut problems = Vec::new();
    if let Some([min, max]) = expect.hcp {
        if (holdings.hcp.min, holdings.hcp.max) != (min, max) {
            problems.push(format!("{}: expected {}-{} hcp", seat, min, max));
        }
    }
    if let Some(floor) = expect.hcp_min_at_least {
        if holdings.hcp.min < floor {
            problems.push(format!("{}: expected hcp min >= {}", seat, floor));
        }
    }
    if let Some(ceiling) = expect.hcp_min_below {
        if holdings.hcp.min >= ceiling {
            problems.push(format!("{}: expected hcp min < {}", seat, ceiling));
        }
    }
    if expect.balanced.is_some() && holdings.is_balanced != expect.balanced {
        problems.push(format!("{}: expected balanced {:?}", seat, expect.balanced));
    }
    for (suit, [min, max]) in &expect.suits {
        let range = holdings.suit(*suit);
        if (range.min, range.max) != (*min, *max) {
            problems.push(format!("{}: expected {}-{}{}", seat, min, max, suit.symbol()));
        }
    }
    problems
}

#[test]
fn run_inference_scenarios() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let content =
        fs::read_to_string("tests/inference_scenarios.yaml").expect("Failed to read scenarios");
    let scenarios: IndexMap<String, Scenario> =
        serde_yaml::from_str(&content).expect("Failed to parse YAML");
    assert!(!scenarios.is_empty());

    let registry: Arc<dyn ConventionRegistry> = Arc::new(builtin_registry());
    let mut failures = Vec::new();

    for (name, scenario) in &scenarios {
        let config = InferenceConfig::new(
            provider(&scenario.own, &registry),
            provider(&scenario.opponents, &registry),
        );
        let mut engine = InferenceEngine::new(config, scenario.observer);
        let auction = Auction::parse(scenario.dealer, &scenario.calls)
            .unwrap_or_else(|e| panic!("{}: {}", name, e));
        engine.process_auction(&auction);
        assert_eq!(engine.timeline().len(), auction.len(), "{}", name);

        let inferences = engine.get_inferences();
        for (seat, expect) in &scenario.expect {
            let holdings = &inferences[seat];
            for problem in check(*seat, holdings, expect) {
                failures.push(format!("{}: {} (got {})", name, problem, holdings));
            }
        }
    }

    if !failures.is_empty() {
        for f in &failures {
            println!("{}", f);
        }
        panic!("{} scenario expectations failed", failures.len());
    }
}

#[test]
fn test_timeline_serializes() {
    let natural: Arc<dyn InferenceProvider> = Arc::new(NaturalProvider::standard().unwrap());
    let mut engine = InferenceEngine::new(
        InferenceConfig::new(natural.clone(), natural),
        Position::South,
    );
    engine.process_auction(&Auction::parse(Position::North, "1N P").unwrap());
    let json = serde_json::to_value(engine.timeline()).unwrap();
    assert_eq!(json[0]["seat"], "N");
    assert_eq!(json[0]["call"]["type"], "bid");
    assert_eq!(json[0]["inference"]["min_hcp"], 15);
    assert_eq!(json[0]["snapshot"]["N"]["hcp"]["max"], 17);
    assert!(json[1]["inference"].is_null());
}
