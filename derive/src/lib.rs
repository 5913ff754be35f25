//! # Fixendian derive crate
//!
//! The documentation is located in the main `fixendian` crate

#![deny(missing_docs)]

mod attributes;

use attributes::Attributes;
use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// produces a token stream of error to warn the final user of the error
macro_rules! unwrap {
    ($expression:expr) => {
        match $expression {
            Ok(a) => a,
            Err(e) => return e.to_compile_error().into(),
        }
    };
}

/// The main derive method
#[proc_macro_derive(Wire, attributes(wire))]
pub fn derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // get main attributes
    let attributes = unwrap!(Attributes::for_struct(&input.attrs));

    // generate everything
    let wire_impl = unwrap!(wire_impl(&input, &attributes));

    // thing for generation
    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Build the output
    let expanded = quote! {
        // The generated impl.
        #[automatically_derived]
        impl #impl_generics fixendian::Wire for #name #ty_generics #where_clause {
            #wire_impl
        }
    };

    // Hand the output tokens back to the compiler
    proc_macro::TokenStream::from(expanded)
}

/// Generate implementation for a structure
fn wire_impl(input: &DeriveInput, attributes: &Attributes) -> syn::Result<TokenStream> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "Wire can only be derived for structures",
            ))
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "Wire can only be derived for structures",
            ))
        }
    };

    let (size_code, read_code, write_code, field_list) =
        generate_for_fields(&data.fields, attributes)?;

    Ok(quote! {
        fn size_at_rest(&self) -> usize {
            #size_code
        }

        fn read_from<R: std::io::Read>(__wire_reader: &mut R) -> fixendian::Result<Self> {
            #read_code
            Ok(Self #field_list)
        }

        fn write_to<W: std::io::Write>(&self, __wire_writer: &mut W) -> fixendian::Result<()> {
            #write_code
            Ok(())
        }
    })
}

/// generate code for all fields of a struct
fn generate_for_fields(
    fields: &Fields,
    attributes: &Attributes,
) -> syn::Result<(TokenStream, TokenStream, TokenStream, TokenStream)> {
    let mut size_code = TokenStream::new();
    let mut read_code = TokenStream::new();
    let mut write_code = TokenStream::new();
    let mut field_list = TokenStream::new();

    if let Some((ty, value)) = &attributes.magic {
        size_code.extend(quote! {
            core::mem::size_of::<#ty>() +
        });
        read_code.extend(quote! {
            let __wire_magic = <#ty as fixendian::Wire>::read_from(__wire_reader)?;
            let __wire_expected: #ty = core::convert::From::from(#value);
            if __wire_magic != __wire_expected {
                return Err(fixendian::stream::magic_mismatch(__wire_expected, __wire_magic));
            }
        });
        write_code.extend(quote! {
            let __wire_magic: #ty = core::convert::From::from(#value);
            fixendian::Wire::write_to(&__wire_magic, __wire_writer)?;
        });
    }

    match fields {
        Fields::Named(fields) => {
            for field in fields.named.iter() {
                let field_attributes = Attributes::for_field(&field.attrs)?;
                // all named fields have an ident
                let field_ident = match &field.ident {
                    Some(ident) => ident.clone(),
                    None => return Err(syn::Error::new(field.span(), "Unnamed field")),
                };
                generate_for_item(
                    &field_ident,
                    &field.ty,
                    &field_ident.to_token_stream(),
                    &field_attributes,
                    &mut size_code,
                    &mut read_code,
                    &mut write_code,
                );
                field_list.extend(quote! {
                    #field_ident,
                });
            }
            field_list = quote! { { #field_list } };
        }
        Fields::Unnamed(fields) => {
            for (i, field) in fields.unnamed.iter().enumerate() {
                let field_attributes = Attributes::for_field(&field.attrs)?;
                let field_ident = Ident::new(&format!("field_{}", i), field.span());
                let index = syn::Index::from(i);
                generate_for_item(
                    &field_ident,
                    &field.ty,
                    &quote! { #index },
                    &field_attributes,
                    &mut size_code,
                    &mut read_code,
                    &mut write_code,
                );
                field_list.extend(quote! {
                    #field_ident,
                });
            }
            field_list = quote! { (#field_list) };
        }
        Fields::Unit => {}
    };
    size_code.extend(quote! { 0 });
    Ok((size_code, read_code, write_code, field_list))
}

/// Generate code for a single field
fn generate_for_item(
    field_ident: &Ident,
    field_type: &syn::Type,
    member: &TokenStream,
    attributes: &Attributes,
    size_code: &mut TokenStream,
    read_code: &mut TokenStream,
    write_code: &mut TokenStream,
) {
    if attributes.skip {
        read_code.extend(quote! {
            let #field_ident = core::default::Default::default();
        });
        return;
    }
    size_code.extend(quote! {
        <#field_type as fixendian::Wire>::size_at_rest(&self.#member) +
    });
    read_code.extend(quote! {
        let #field_ident = <#field_type as fixendian::Wire>::read_from(__wire_reader)?;
    });
    write_code.extend(quote! {
        <#field_type as fixendian::Wire>::write_to(&self.#member, __wire_writer)?;
    });
}
