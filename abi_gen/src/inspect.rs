/* Quick listing of the interfaces declared by an artifact */

use crate::shorten::shorten_type;
use abi_types::{AbiDocument, AbiFunction};

/* One block per interface, full path as heading, functions in document order */
pub fn emit_inspect(document: &AbiDocument) -> String {
  let mut output = String::new();

  for interface in document.interfaces() {
    output.push_str(&format!("{} {{\n", interface.name));
    for function in interface.functions() {
      output.push_str(&format!("    {}\n", describe_function(function)));
    }
    output.push_str("}\n\n");
  }

  output
}

/* `name(arg: Type) -> (Out)` */
fn describe_function(function: &AbiFunction) -> String {
  let inputs: Vec<String> = function
    .inputs
    .iter()
    .map(|input| format!("{}: {}", input.name, shorten_type(&input.ty)))
    .collect();
  let outputs: Vec<String> = function.outputs.iter().map(|output| shorten_type(&output.ty)).collect();

  format!("{}({}) -> ({})", function.name, inputs.join(", "), outputs.join(", "))
}
