use proc_macro2::Ident;
use syn::parse::{Parse, Result};
use syn::spanned::Spanned;
use syn::{Attribute, Expr};

/// Attributes that can be used with derive, all in one structure to make it easier to parse.
#[derive(Clone, Default)]
pub struct Attributes {
    /// magic type and value for this structure
    pub magic: Option<(Ident, Expr)>,
    /// field is not on the wire, it is defaulted on read
    pub skip: bool,
}

impl Attributes {
    /// Get structure attributes dedicated to this derive
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut result = Attributes::default();
        result._parse(attrs)?;
        Ok(result)
    }

    // sub method of parse and extend
    fn _parse(&mut self, attrs: &[Attribute]) -> Result<()> {
        for attribute in attrs.iter() {
            if !attribute.path().is_ident("wire") {
                continue;
            }
            let meta_parser = syn::meta::parser(|meta| {
                if meta.path.is_ident("skip") {
                    self.skip = true;
                    Ok(())
                } else if meta.path.is_ident("magic") {
                    meta.parse_nested_meta(|meta| {
                        let ident = meta.path.get_ident().cloned().ok_or_else(|| {
                            meta.error("Magic must be of the form #[wire(magic(<type>=<value>))]")
                        })?;
                        let value = Expr::parse(meta.value()?)?;
                        self.magic = Some((ident, value));
                        Ok(())
                    })
                } else {
                    Err(meta.error("Unsupported wire attribute"))
                }
            });
            attribute.parse_args_with(meta_parser)?;
        }
        Ok(())
    }

    /// Structure attributes, a whole structure cannot be skipped
    pub fn for_struct(attrs: &[Attribute]) -> Result<Self> {
        let result = Self::parse(attrs)?;
        if result.skip {
            let attribute = attrs.iter().find(|a| a.path().is_ident("wire"));
            let span = attribute.map_or_else(proc_macro2::Span::call_site, |a| a.span());
            return Err(syn::Error::new(span, "skip is only allowed on fields"));
        }
        Ok(result)
    }

    /// Field attributes, magic does not propagate to fields
    pub fn for_field(attrs: &[Attribute]) -> Result<Self> {
        let result = Self::parse(attrs)?;
        if let Some((ident, _)) = &result.magic {
            return Err(syn::Error::new(ident.span(), "magic is only allowed on the structure"));
        }
        Ok(result)
    }
}
