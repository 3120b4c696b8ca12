//! `#[renderer]` attribute implementation.

use proc_macro::TokenStream;
use quote::quote;
use syn::{FnArg, ItemFn, Type, parse_macro_input};

pub fn renderer(attr: TokenStream, item: TokenStream) -> TokenStream {
	let func = parse_macro_input!(item as ItemFn);

	let mut priority: i16 = 0;
	let parser = syn::meta::parser(|meta| {
		if meta.path.is_ident("priority") {
			let lit: syn::LitInt = meta.value()?.parse()?;
			priority = lit.base10_parse()?;
			Ok(())
		} else {
			Err(meta.error("unknown renderer attribute"))
		}
	});
	parse_macro_input!(attr with parser);

	let inputs: Vec<&FnArg> = func.sig.inputs.iter().collect();
	let [FnArg::Typed(arg)] = inputs.as_slice() else {
		return syn::Error::new_spanned(&func.sig, "renderer must be a free function with exactly one parameter")
			.to_compile_error()
			.into();
	};

	let Type::Reference(reference) = &*arg.ty else {
		return syn::Error::new_spanned(&arg.ty, "renderer parameter must be a shared reference `&T`")
			.to_compile_error()
			.into();
	};
	if reference.mutability.is_some() {
		return syn::Error::new_spanned(&arg.ty, "renderer parameter must be a shared reference `&T`")
			.to_compile_error()
			.into();
	}

	let target = &reference.elem;
	let name = &func.sig.ident;

	quote! {
		#func

		::ornate_pretty::register_renderer!(#name: #target => #name, priority: #priority);
	}
	.into()
}
