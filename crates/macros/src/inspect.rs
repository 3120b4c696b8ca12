//! `#[derive(Inspect)]` implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, GenericParam, Index, LitStr, parse_macro_input, parse_quote};

/// Container-level `#[inspect(..)]` options.
#[derive(Default)]
struct ContainerOpts {
	display: bool,
	printable: bool,
}

/// Field-level `#[inspect(..)]` options.
#[derive(Default)]
struct FieldOpts {
	skip: bool,
	rename: Option<String>,
}

pub fn derive_inspect(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	expand(input).unwrap_or_else(|e| e.to_compile_error()).into()
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
	let opts = container_opts(&input.attrs)?;
	let name = &input.ident;

	if let Some(lt) = input.generics.lifetimes().next() {
		return Err(syn::Error::new_spanned(
			lt,
			"Inspect requires 'static types; lifetime parameters are not supported",
		));
	}
	if opts.printable && input.generics.type_params().next().is_some() {
		return Err(syn::Error::new_spanned(
			&input.generics,
			"#[inspect(printable)] registers a single concrete type; it cannot be used on generic types",
		));
	}

	for param in &mut input.generics.params {
		if let GenericParam::Type(ty) = param {
			if opts.display {
				ty.bounds.push(parse_quote!('static));
			} else {
				ty.bounds.push(parse_quote!(::ornate_pretty::Inspect));
			}
		}
	}
	if opts.display {
		input
			.generics
			.make_where_clause()
			.predicates
			.push(parse_quote!(Self: ::core::fmt::Display));
	}
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let body = if opts.display {
		quote! {
			fn shape(&self) -> ::ornate_pretty::Shape<'_> {
				::ornate_pretty::Shape::display(self)
			}
		}
	} else {
		match &input.data {
			Data::Struct(data) => {
				let fields = struct_fields(&data.fields)?;
				quote! {
					fn shape(&self) -> ::ornate_pretty::Shape<'_> {
						::ornate_pretty::Shape::Struct(::std::vec![#(#fields),*])
					}
				}
			}
			Data::Enum(data) if data.variants.is_empty() => quote! {
				fn shape(&self) -> ::ornate_pretty::Shape<'_> {
					match *self {}
				}
			},
			Data::Enum(data) => {
				let mut shape_arms = Vec::new();
				let mut variant_arms = Vec::new();
				for variant in &data.variants {
					let ident = &variant.ident;
					let label = ident.to_string();
					let (pattern, fields) = variant_fields(ident, &variant.fields)?;
					shape_arms.push(quote! {
						#pattern => ::ornate_pretty::Shape::Struct(::std::vec![#(#fields),*])
					});
					let wildcard = match &variant.fields {
						Fields::Unit => quote! { Self::#ident },
						Fields::Unnamed(_) => quote! { Self::#ident(..) },
						Fields::Named(_) => quote! { Self::#ident { .. } },
					};
					variant_arms.push(quote! { #wildcard => ::core::option::Option::Some(#label) });
				}
				quote! {
					fn shape(&self) -> ::ornate_pretty::Shape<'_> {
						match self {
							#(#shape_arms,)*
						}
					}

					fn variant(&self) -> ::core::option::Option<&'static str> {
						match self {
							#(#variant_arms,)*
						}
					}
				}
			}
			Data::Union(_) => {
				return Err(syn::Error::new_spanned(
					&input,
					"Inspect cannot be derived for unions; use #[inspect(display)] or implement it by hand",
				));
			}
		}
	};

	let printable = opts.printable.then(|| quote! { ::ornate_pretty::printable!(#name); });

	Ok(quote! {
		impl #impl_generics ::ornate_pretty::Inspect for #name #ty_generics #where_clause {
			#body
		}

		#printable
	})
}

fn container_opts(attrs: &[Attribute]) -> syn::Result<ContainerOpts> {
	let mut opts = ContainerOpts::default();
	for attr in attrs.iter().filter(|a| a.path().is_ident("inspect")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("display") {
				opts.display = true;
				Ok(())
			} else if meta.path.is_ident("printable") {
				opts.printable = true;
				Ok(())
			} else {
				Err(meta.error("expected `display` or `printable`"))
			}
		})?;
	}
	Ok(opts)
}

fn field_opts(attrs: &[Attribute]) -> syn::Result<FieldOpts> {
	let mut opts = FieldOpts::default();
	for attr in attrs.iter().filter(|a| a.path().is_ident("inspect")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("skip") {
				opts.skip = true;
				Ok(())
			} else if meta.path.is_ident("rename") {
				let lit: LitStr = meta.value()?.parse()?;
				opts.rename = Some(lit.value());
				Ok(())
			} else {
				Err(meta.error("expected `skip` or `rename = \"..\"`"))
			}
		})?;
	}
	Ok(opts)
}

/// `Field::new` calls reading the members of `self`.
fn struct_fields(fields: &Fields) -> syn::Result<Vec<TokenStream2>> {
	let mut out = Vec::new();
	for (i, field) in fields.iter().enumerate() {
		let opts = field_opts(&field.attrs)?;
		if opts.skip {
			continue;
		}
		let member = match &field.ident {
			Some(ident) => quote! { #ident },
			None => {
				let index = Index::from(i);
				quote! { #index }
			}
		};
		let label = opts.rename.unwrap_or_else(|| member_name(field.ident.as_ref(), i));
		out.push(quote! { ::ornate_pretty::Field::new(#label, &self.#member) });
	}
	Ok(out)
}

/// Match pattern binding a variant's members, and the `Field::new` calls
/// reading those bindings.
fn variant_fields(variant: &syn::Ident, fields: &Fields) -> syn::Result<(TokenStream2, Vec<TokenStream2>)> {
	let mut out = Vec::new();
	let pattern = match fields {
		Fields::Unit => quote! { Self::#variant },
		Fields::Named(named) => {
			let mut binds = Vec::new();
			for field in &named.named {
				let opts = field_opts(&field.attrs)?;
				if opts.skip {
					continue;
				}
				let Some(ident) = &field.ident else { continue };
				let label = opts.rename.unwrap_or_else(|| member_name(Some(ident), 0));
				out.push(quote! { ::ornate_pretty::Field::new(#label, #ident) });
				binds.push(quote! { #ident });
			}
			quote! { Self::#variant { #(#binds,)* .. } }
		}
		Fields::Unnamed(unnamed) => {
			let mut binds = Vec::new();
			for (i, field) in unnamed.unnamed.iter().enumerate() {
				let opts = field_opts(&field.attrs)?;
				if opts.skip {
					binds.push(quote! { _ });
					continue;
				}
				let bind = format_ident!("__field{}", i);
				let label = opts.rename.unwrap_or_else(|| member_name(None, i));
				out.push(quote! { ::ornate_pretty::Field::new(#label, #bind) });
				binds.push(quote! { #bind });
			}
			quote! { Self::#variant(#(#binds),*) }
		}
	};
	Ok((pattern, out))
}

/// Rendered name of a member: the identifier, or the position for tuple members.
fn member_name(ident: Option<&syn::Ident>, index: usize) -> String {
	match ident {
		Some(ident) => {
			let name = ident.to_string();
			name.strip_prefix("r#").map(str::to_owned).unwrap_or(name)
		}
		None => index.to_string(),
	}
}
