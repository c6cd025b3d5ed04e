//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Properties accepted by [`solution_runner`].
#[derive(Default)]
struct RunnerProperties {
    name: Option<Expr>,
    parsed: Option<Type>,
    part_one: Option<Type>,
    part_two: Option<Type>,
}

/// Store the value of a `key = value` property, rejecting a repeated key.
fn set_once<T: Parse>(slot: &mut Option<T>, meta: &ParseNestedMeta, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

fn missing_property(key: &str) -> TokenStream {
    Error::new(
        Span::call_site(),
        format!("missing required property: '{key}'"),
    )
    .to_compile_error()
    .into()
}

/// Implement `aoc_framework::runner::SolutionRunner` for the annotated struct or impl block's
/// type.
///
/// # Properties
///
/// - `name` (required): expression evaluating to `&str`, shown as the solution's title.
/// - `parsed` (required): type implementing `ParseData`, parsed once from the raw input.
/// - `part_one` (required): type implementing `Solution<PartOne, Input = parsed>`.
/// - `part_two` (optional): type implementing `Solution<PartTwo, Input = parsed>`.
///
/// A compile error is raised for a missing required property, a repeated or unknown property, or
/// when applied to anything but a struct or impl block.
///
/// # Example
///
/// ```ignore
/// #[solution_runner(name = "Day 3: Lobby", parsed = BatteryBanks, part_one = Day03, part_two = Day03)]
/// impl super::AdventOfCode2025<3> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();
    let properties_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            set_once(&mut properties.name, &meta, "name")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut properties.parsed, &meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut properties.part_one, &meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut properties.part_two, &meta, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with properties_parser);

    let Some(name_expr) = properties.name else {
        return missing_property("name");
    };
    let Some(parsed_ty) = properties.parsed else {
        return missing_property("parsed");
    };
    let Some(part_one_ty) = properties.part_one else {
        return missing_property("part_one");
    };

    let solve_call = if let Some(part_two_ty) = properties.part_two {
        quote! {
            aoc_framework::runner::solve_full_solution::<#parsed_ty, #part_one_ty, #part_two_ty>(
                #name_expr, input, handler, timed
            )
        }
    } else {
        quote! {
            aoc_framework::runner::solve_half_solution::<#parsed_ty, #part_one_ty>(
                #name_expr, input, handler, timed
            )
        }
    };

    let original_input = proc_macro2::TokenStream::from(input.clone());
    let runner_ty = match parse_macro_input!(input as Item) {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #original_input

        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool,
            ) -> aoc_framework::DynamicResult<()> {
                #solve_call
            }
        }
    })
}
