//! Rendering builder specs to Rust source and writing them to output slots.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::quote;

use crate::error::GenerateError;
use crate::model::{BuilderSpec, OutputSlot, path_to_string};

/// Capability to store generated text under a named slot.
pub trait OutputSink {
    fn write_slot(&mut self, slot: &OutputSlot, contents: &str) -> io::Result<()>;
}

/// Writes each slot to `<root>/<slot key>.rs`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, slot: &OutputSlot) -> PathBuf {
        self.root.join(slot.file_name())
    }
}

impl OutputSink for DirectorySink {
    fn write_slot(&mut self, slot: &OutputSlot, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(slot);

        // Unchanged output keeps its mtime so cargo does not rebuild for nothing.
        if fs::read_to_string(&path).is_ok_and(|existing| existing == contents) {
            return Ok(());
        }

        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(contents.as_bytes())?;
        writer.flush()
    }
}

/// Keeps generated units in memory, keyed by slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    slots: BTreeMap<OutputSlot, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the slot with the given fully qualified name.
    pub fn get(&self, fully_qualified_name: &str) -> Option<&str> {
        self.slots
            .get(&OutputSlot::new(fully_qualified_name))
            .map(String::as_str)
    }

    pub fn slots(&self) -> impl Iterator<Item = (&OutputSlot, &str)> {
        self.slots.iter().map(|(slot, contents)| (slot, contents.as_str()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<OutputSlot, String> {
        self.slots
    }
}

impl OutputSink for MemorySink {
    fn write_slot(&mut self, slot: &OutputSlot, contents: &str) -> io::Result<()> {
        self.slots.insert(slot.clone(), contents.to_string());
        Ok(())
    }
}

/// Token form of a builder unit.
pub fn builder_tokens(spec: &BuilderSpec) -> TokenStream {
    let BuilderSpec {
        class_name,
        vis,
        generics,
        source_name,
        target_type,
        fields,
        ..
    } = spec;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let doc = format!(
        " Fluent builder for [`{}`], generated from [`{source_name}`].",
        path_to_string(target_type)
    );

    let field_decls = fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        quote! { #ident: #ty }
    });

    let setters = fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        quote! {
            pub fn #ident(mut self, #ident: #ty) -> Self {
                self.#ident = #ident;
                self
            }
        }
    });

    let calls = fields.iter().map(|field| {
        let ident = &field.ident;
        let setter = &field.setter;
        quote! { target.#setter(self.#ident); }
    });

    let binding = if fields.is_empty() {
        quote! { let target }
    } else {
        quote! { let mut target }
    };

    quote! {
        #[doc = #doc]
        #[derive(Default)]
        #vis struct #class_name #generics #where_clause {
            #(#field_decls,)*
        }

        impl #impl_generics #class_name #ty_generics #where_clause {
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            #(#setters)*

            pub fn build(self) -> #target_type {
                #binding = <#target_type as ::core::default::Default>::default();
                #(#calls)*
                target
            }
        }
    }
}

/// Render a builder unit as formatted Rust source.
pub fn render(spec: &BuilderSpec) -> Result<String, GenerateError> {
    let file: syn::File = syn::parse2(builder_tokens(spec)).map_err(|source| GenerateError::Render {
        builder: spec.fully_qualified_name(),
        source,
    })?;

    Ok(format!(
        "// @generated by swagger-builder-build from `{}::{}`. Do not edit.\n\n{}",
        spec.module_path,
        spec.source_name,
        prettyplease::unparse(&file)
    ))
}

/// Render `spec` and write it to its output slot.
pub fn emit(spec: &BuilderSpec, sink: &mut dyn OutputSink) -> Result<OutputSlot, GenerateError> {
    let contents = render(spec)?;
    let slot = spec.output_slot();

    sink.write_slot(&slot, &contents).map_err(|source| GenerateError::Write {
        builder: spec.fully_qualified_name(),
        source,
    })?;

    Ok(slot)
}
