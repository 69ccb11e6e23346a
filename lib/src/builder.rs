use tar::{Builder, EntryType, Header};

pub struct MessageBuilder {
    header_lines: Vec<String>,
    body: Option<String>
}

/// Builder for raw message text, mostly for
/// testing purposes
///
/// Produces a header block with the lines in call
/// order, followed by an optional body behind the
/// separating blank line
impl MessageBuilder {
    pub fn new() -> MessageBuilder {
        MessageBuilder {
            header_lines: Vec::new(),
            body: None
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.header_lines.push(format!("{}: {}", name, value));
        self
    }

    pub fn with_folded_line(mut self, fragment: &str) -> Self {
        self.header_lines.push(format!("\t\t{}", fragment));
        self
    }

    pub fn with_line(mut self, line: &str) -> Self {
        self.header_lines.push(line.to_string());
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut text = String::new();
        for line in &self.header_lines {
            text.push_str(line);
            text.push('\n');
        }
        if let Some(body) = &self.body {
            text.push('\n');
            text.push_str(body);
            text.push('\n');
        }
        text
    }
}

pub struct ArchiveBuilder {
    archive: Builder<Vec<u8>>
}

/// Builder for tar containers held in memory, mostly for
/// testing purposes
///
/// Entries end up in the container in call order, which is
/// also the order a scan of the container walks them in
impl ArchiveBuilder {
    pub fn new() -> ArchiveBuilder {
        ArchiveBuilder {
            archive: Builder::new(Vec::new())
        }
    }

    pub fn with_message(self, path: &str, text: &str) -> Self {
        self.with_file(path, text.as_bytes())
    }

    pub fn with_file(mut self, path: &str, content: &[u8]) -> Self {
        let mut header = Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        self.archive.append_data(&mut header, path, content)
            .expect("Unable to append file entry");
        self
    }

    pub fn with_directory(mut self, path: &str) -> Self {
        let mut header = Header::new_gnu();
        header.set_entry_type(EntryType::dir());
        header.set_size(0);
        header.set_mode(0o755);
        self.archive.append_data(&mut header, path, std::io::empty())
            .expect("Unable to append directory entry");
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.archive.into_inner()
            .expect("Unable to finish tar container")
    }
}
