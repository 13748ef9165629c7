use crate::shorten::{DEFAULT_PREFIXES, PrefixTable, shorten_type_with};
use abi_types::{AbiDocument, AbiFunction, AbiInterface};

const INDENT: &str = "    ";

/* Symbols referenced by generated signatures */
const HEADER_IMPORTS: &[&str] = &[
  "use starknet::{ContractAddress, ClassHash};",
  "use dojo::world::IWorldDispatcher;",
];

const UNGROUPED_MARKER: &str = "// WITHOUT INTERFACE !!!";
const L1_HANDLERS_HEADER: &str = "// L1 Handlers";
const L1_HANDLER_ATTRIBUTE: &str = "#[l1_handler]";

pub struct InterfaceGenerator<'a> {
  options: InterfaceGeneratorOptions<'a>,
}

pub struct InterfaceGeneratorOptions<'a> {
  /* Trait is named `I<contract_name>` */
  pub contract_name: String,
  pub prefixes: PrefixTable<'a>,
}

impl<'a> Default for InterfaceGeneratorOptions<'a> {
  fn default() -> Self {
    Self {
      contract_name: "Contract".to_string(),
      prefixes: DEFAULT_PREFIXES,
    }
  }
}

impl<'a> InterfaceGenerator<'a> {
  pub fn new(options: InterfaceGeneratorOptions<'a>) -> Self {
    Self { options }
  }

  pub fn emit(&self, document: &AbiDocument) -> String {
    let mut output = String::new();

    for import in HEADER_IMPORTS {
      output.push_str(import);
      output.push('\n');
    }
    output.push('\n');

    output.push_str("#[starknet::interface]\n");
    output.push_str(&format!("trait I{}<TState> {{\n", self.options.contract_name));

    for interface in document.interfaces() {
      output.push_str(&self.emit_interface_section(interface));
    }

    /* Top-level functions keep document order */
    output.push_str(&format!("{}{}\n", INDENT, UNGROUPED_MARKER));
    let mut ungrouped = 0usize;
    for function in document.functions() {
      output.push_str(&format!("{}{}\n", INDENT, self.render_signature(function)));
      ungrouped += 1;
    }
    output.push('\n');

    output.push_str("}\n\n");

    output.push_str(L1_HANDLERS_HEADER);
    output.push('\n');
    let mut handlers = 0usize;
    for handler in document.l1_handlers() {
      output.push_str(L1_HANDLER_ATTRIBUTE);
      output.push('\n');
      output.push_str(&self.render_signature(handler));
      output.push('\n');
      handlers += 1;
    }
    output.push('\n');

    tracing::debug!(
      contract = %self.options.contract_name,
      interfaces = document.interfaces().count(),
      ungrouped,
      handlers,
      skipped = document.unknown_count(),
      "emitted interface"
    );

    output
  }

  /* Comment naming the interface, then its functions sorted by name */
  fn emit_interface_section(&self, interface: &AbiInterface) -> String {
    let mut section = format!("{}// {}\n", INDENT, interface.short_name());

    let mut functions: Vec<&AbiFunction> = interface.functions().collect();
    functions.sort_by(|a, b| a.name.cmp(&b.name));

    for function in functions {
      section.push_str(&format!("{}{}\n", INDENT, self.render_signature(function)));
    }
    section.push('\n');

    section
  }

  /* `fn name(<self>, arg: Type) -> Out;` */
  pub fn render_signature(&self, function: &AbiFunction) -> String {
    let self_param = if function.is_external() {
      "ref self: TState"
    } else {
      "self: @TState"
    };

    let mut params = vec![self_param.to_string()];
    params.extend(function.inputs.iter().map(|input| {
      format!("{}: {}", input.name, shorten_type_with(&input.ty, self.options.prefixes))
    }));

    let mut signature = format!("fn {}({})", function.name, params.join(", "));

    if !function.outputs.is_empty() {
      let outputs: Vec<String> = function
        .outputs
        .iter()
        .map(|output| shorten_type_with(&output.ty, self.options.prefixes))
        .collect();
      signature.push_str(" -> ");
      signature.push_str(&outputs.join(", "));
    }

    signature.push(';');
    signature
  }
}

/* Emit the interface for `document` with the default prefix table */
pub fn emit_interface(document: &AbiDocument, contract_name: &str) -> String {
  InterfaceGenerator::new(InterfaceGeneratorOptions {
    contract_name: contract_name.to_string(),
    ..Default::default()
  })
  .emit(document)
}
