use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, Path, parse_macro_input};

/// Ties a host value type to its C mirror in `wattle-sys`.
///
/// The struct must be `#[repr(C)]`, have named fields, and every field must exist under the same
/// name on the native type. The derive emits a `const` block that fails compilation when the size,
/// the alignment or any field offset of the two types disagree, and implements
/// `crate::marshal::NativeLayout` so values can be reinterpreted across the boundary.
///
/// Only meant to be used inside the `wattle` crate, the generated impl refers to `crate::marshal`.
///
/// # Usage
/// ```ignore
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable, NativeLayout)]
/// #[native(wattle_sys::Vector2)]
/// pub struct Vector2 {
///     pub x: f32,
///     pub y: f32,
/// }
/// ```
#[proc_macro_derive(NativeLayout, attributes(native))]
pub fn derive_native_layout(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_native_layout(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_native_layout(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "NativeLayout cannot be derived for generic types",
        ));
    }

    if !has_repr_c(input)? {
        return Err(syn::Error::new_spanned(
            name,
            "NativeLayout requires #[repr(C)] on the host type",
        ));
    }

    let native = native_path(input)?;
    let fields = named_fields(input)?;

    let size_msg = format!("size of `{name}` differs from its native mirror");
    let align_msg = format!("alignment of `{name}` differs from its native mirror");
    let offset_checks = fields.iter().map(|field| {
        let msg = format!("offset of `{name}::{field}` differs from its native mirror");
        quote! {
            assert!(
                ::core::mem::offset_of!(#name, #field) == ::core::mem::offset_of!(#native, #field),
                #msg
            );
        }
    });

    Ok(quote! {
        const _: () = {
            assert!(
                ::core::mem::size_of::<#name>() == ::core::mem::size_of::<#native>(),
                #size_msg
            );
            assert!(
                ::core::mem::align_of::<#name>() == ::core::mem::align_of::<#native>(),
                #align_msg
            );
            #(#offset_checks)*
        };

        impl crate::marshal::NativeLayout for #name {
            type Native = #native;
        }
    })
}

fn has_repr_c(input: &DeriveInput) -> syn::Result<bool> {
    for attr in &input.attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        let list = attr.meta.require_list()?;
        if list
            .tokens
            .to_string()
            .split(',')
            .any(|part| part.trim() == "C")
        {
            return Ok(true);
        }
    }
    Ok(false)
}

fn native_path(input: &DeriveInput) -> syn::Result<Path> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("native"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "missing #[native(path::to::NativeType)] attribute",
            )
        })?;
    attr.parse_args::<Path>()
}

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<Ident>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "NativeLayout can only be derived for structs",
        ));
    };

    match &data.fields {
        Fields::Named(named) => Ok(named
            .named
            .iter()
            .filter_map(|field| field.ident.clone())
            .collect()),
        other => Err(syn::Error::new_spanned(
            other,
            "NativeLayout requires named fields",
        )),
    }
}
