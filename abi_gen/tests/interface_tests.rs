/* End-to-end interface generation tests
 *
 * Artifacts are written to temp files, loaded through the loader and emitted.
 */

use abi_gen::{emit_interface, shorten_type};
use abi_loader::{contract_name_from_path, load_artifact};
use std::fs;

const GAME_ARTIFACT: &str = r#"{"abi":[
  {"type":"interface","name":"a::b::IActions","items":[
    {"type":"function","name":"spawn","inputs":[],"outputs":[],"state_mutability":"external"}
  ]},
  {"type":"l1_handler","name":"on_msg","inputs":[{"name":"v","type":"core::integer::u32"}],"outputs":[],"state_mutability":"external"}
]}"#;

/* Closer to what sozo writes: impls, structs and events around the interesting items */
const ACTIONS_ARTIFACT: &str = r#"{"abi":[
  {"type":"impl","name":"ActionsImpl","interface_name":"dojo_examples::actions::IActions"},
  {"type":"struct","name":"core::integer::u256","members":[{"name":"low","type":"core::integer::u128"}]},
  {"type":"interface","name":"dojo_examples::actions::IActions","items":[
    {"type":"function","name":"spawn","inputs":[],"outputs":[],"state_mutability":"external"},
    {"type":"function","name":"move","inputs":[{"name":"direction","type":"dojo_examples::models::Direction"}],"outputs":[],"state_mutability":"external"},
    {"type":"function","name":"get_position","inputs":[{"name":"player","type":"core::starknet::contract_address::ContractAddress"}],"outputs":[{"type":"dojo_examples::models::Position"}],"state_mutability":"view"}
  ]},
  {"type":"interface","name":"dojo::world::IWorldProvider","items":[
    {"type":"function","name":"world","inputs":[],"outputs":[{"type":"dojo::world::IWorldDispatcher"}],"state_mutability":"view"}
  ]},
  {"type":"function","name":"dojo_resource","inputs":[],"outputs":[{"type":"core::felt252"}],"state_mutability":"view"},
  {"type":"function","name":"upgrade","inputs":[{"name":"new_class_hash","type":"core::starknet::class_hash::ClassHash"}],"outputs":[],"state_mutability":"external"},
  {"type":"event","name":"dojo_examples::actions::actions::Event","kind":"enum","variants":[]}
]}"#;

fn generate(content: &str, file_name: &str) -> String {
  let dir = tempfile::tempdir().expect("temp dir");
  let path = dir.path().join(file_name);
  fs::write(&path, content).expect("write artifact");

  let document = load_artifact(&path).expect("load artifact");
  emit_interface(&document, &contract_name_from_path(&path))
}

fn collapse_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn game_scenario() {
  let output = generate(GAME_ARTIFACT, "Game.json");
  let collapsed = collapse_whitespace(&output);

  assert!(collapsed.contains("trait IGame<TState> { // IActions fn spawn(ref self: TState);"));
  assert!(output.contains("// L1 Handlers\n#[l1_handler]\nfn on_msg(ref self: TState, v: u32);\n"));
  assert!(!output.contains("core::integer::"));

  let trait_close = output.find("\n}\n").expect("trait closes");
  let handlers = output.find("// L1 Handlers").expect("handler section");
  assert!(trait_close < handlers);
}

#[test]
fn actions_artifact_full_output() {
  let output = generate(ACTIONS_ARTIFACT, "actions.json");

  let expected = "\
use starknet::{ContractAddress, ClassHash};
use dojo::world::IWorldDispatcher;

#[starknet::interface]
trait Iactions<TState> {
    // IActions
    fn get_position(self: @TState, player: ContractAddress) -> dojo_examples::models::Position;
    fn move(ref self: TState, direction: dojo_examples::models::Direction);
    fn spawn(ref self: TState);

    // IWorldProvider
    fn world(self: @TState) -> IWorldDispatcher;

    // WITHOUT INTERFACE !!!
    fn dojo_resource(self: @TState) -> felt252;
    fn upgrade(ref self: TState, new_class_hash: ClassHash);

}

// L1 Handlers

";
  assert_eq!(output, expected);
}

#[test]
fn generation_is_deterministic() {
  assert_eq!(
    generate(ACTIONS_ARTIFACT, "actions.json"),
    generate(ACTIONS_ARTIFACT, "actions.json")
  );
}

#[test]
fn emitted_types_are_already_short() {
  let output = generate(ACTIONS_ARTIFACT, "actions.json");

  for line in output.lines().filter(|line| line.trim_start().starts_with("fn ")) {
    assert_eq!(shorten_type(line), line, "line was not fully shortened: {line}");
  }
}
