/* Display shortening of fully-qualified Cairo type paths */

/* Ordered (prefix, replacement) pairs */
pub type PrefixTable<'a> = &'a [(&'a str, &'a str)];

/* Most specific first: `core::starknet::class_hash::` must win over `core::starknet::` */
pub const DEFAULT_PREFIXES: PrefixTable<'static> = &[
  ("core::starknet::class_hash::", ""),
  ("core::starknet::contract_address::", ""),
  ("core::starknet::", ""),
  ("core::array::", ""),
  ("core::integer::", ""),
  ("core::", ""),
  ("dojo::world::", ""),
];

/* Shorten `ty` with the default prefix table */
pub fn shorten_type(ty: &str) -> String {
  shorten_type_with(ty, DEFAULT_PREFIXES)
}

/* Apply every pair of `table` in order. A prefix is only stripped where a path
   starts: at the beginning of the string or after a delimiter such as `<`, `,`
   or a space, so generic arguments are shortened while `hardcore::` inside a
   user path is left alone. Passes repeat until nothing changes.

   Pairs with an empty prefix or a replacement not shorter than the prefix are
   ignored. Every applied pair shrinks the string, so the loop terminates and
   the result is a fixed point. */
pub fn shorten_type_with(ty: &str, table: PrefixTable<'_>) -> String {
  let pairs: Vec<(&str, &str)> = table
    .iter()
    .copied()
    .filter(|(prefix, replacement)| !prefix.is_empty() && replacement.len() < prefix.len())
    .collect();

  let mut current = ty.to_string();
  loop {
    let next = pairs
      .iter()
      .fold(current.clone(), |acc, (prefix, replacement)| strip_leading_paths(&acc, prefix, replacement));

    if next == current {
      return current;
    }
    current = next;
  }
}

/* A path starts at the beginning of the string or after anything that cannot
   be part of a path (identifier characters and the `::` separator) */
fn is_path_start(previous: Option<char>) -> bool {
  match previous {
    None => true,
    Some(c) => !(c.is_alphanumeric() || c == '_' || c == ':'),
  }
}

fn strip_leading_paths(input: &str, prefix: &str, replacement: &str) -> String {
  let mut output = String::with_capacity(input.len());
  let mut rest = input;
  let mut previous: Option<char> = None;

  while let Some(c) = rest.chars().next() {
    if is_path_start(previous) && rest.starts_with(prefix) {
      output.push_str(replacement);
      rest = &rest[prefix.len()..];
      previous = prefix.chars().last();
      continue;
    }

    output.push(c);
    rest = &rest[c.len_utf8()..];
    previous = Some(c);
  }

  output
}
