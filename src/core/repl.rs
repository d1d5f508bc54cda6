//! Interactive data-entry session: capture photo and location, fill the form,
//! submit, review and export what was entered.

use crate::core::context::FieldContext;
use crate::core::location::LocationSource;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::{Catalog, GeoReading, IdTemplate, TreeForm};
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::report::{entries_table, print_catalog, print_receipt};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  photo <FILE>            capture the QR code photo from an image file
  locate                  request the device location
  locate <LAT> <LON>      set the location by hand
  status                  show pending photo and location
  options                 list species, height and DBH options
  submit                  fill the tree form and add the entry
  list                    show the entries of this session
  export <csv|xlsx|json> [FILE]
  help                    show this help
  quit                    end the session";

pub struct SessionShell<'a> {
    ctx: &'a FieldContext,
    session: Session,
    device: Option<Box<dyn LocationSource>>,
}

/// Whether the loop should keep reading commands.
enum Flow {
    Continue,
    Quit,
}

impl<'a> SessionShell<'a> {
    pub fn new(ctx: &'a FieldContext) -> AppResult<Self> {
        Ok(Self {
            ctx,
            session: Session::new(),
            device: ctx.device_location()?,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands until `quit` or end of input. Command errors are shown, not returned.
    pub fn run<R: BufRead>(&mut self, input: R) -> AppResult<()> {
        header("Tree QR field session");
        println!("Type 'help' for the list of commands.");

        let mut lines = input.lines();
        loop {
            prompt("treeqr> ");
            let Some(line) = lines.next() else { break };
            let line = line?;

            match self.dispatch(line.trim(), &mut lines) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => error(e),
            }
        }

        let count = self.session.entries().len();
        info(format!("Session ended with {count} entr{}.", if count == 1 { "y" } else { "ies" }));
        Ok(())
    }

    fn dispatch<I>(&mut self, line: &str, lines: &mut I) -> AppResult<Flow>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match cmd.to_ascii_lowercase().as_str() {
            "" => {}
            "help" | "?" => println!("{HELP}"),
            "photo" => self.capture_photo(rest)?,
            "locate" => self.capture_location(rest)?,
            "status" => self.print_status(),
            "options" => print_catalog(&self.ctx.catalog),
            "submit" | "add" => self.submit(lines)?,
            "list" => self.print_entries(),
            "export" => self.export(rest)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => warning(format!("Unknown command '{other}'. Type 'help'.")),
        }

        Ok(Flow::Continue)
    }

    fn capture_photo(&mut self, arg: &str) -> AppResult<()> {
        if arg.is_empty() {
            return Err(AppError::InvalidOption("usage: photo <FILE>".into()));
        }

        let bytes = fs::read(expand_tilde(arg))?;
        if bytes.is_empty() {
            warning(format!("'{arg}' is empty; photo not captured."));
            return Ok(());
        }

        self.session.set_pending_photo(bytes);
        success("QR image captured.");
        Ok(())
    }

    fn capture_location(&mut self, arg: &str) -> AppResult<()> {
        self.session.request_location();

        if !arg.is_empty() {
            let reading = GeoReading::parse_pair(arg)?;
            self.session.apply_reading(reading);
            success("Location captured!");
            self.print_location();
            return Ok(());
        }

        let Some(device) = self.device.as_mut() else {
            info("No location_command configured. Use 'locate <LAT> <LON>'.");
            return Ok(());
        };

        match device.request()? {
            Some(reading) => {
                self.session.apply_reading(reading);
                success("Location captured!");
                self.print_location();
                Ok(())
            }
            None => {
                info("Waiting for permission or location data... try 'locate' again.");
                Ok(())
            }
        }
    }

    fn print_location(&self) {
        match (self.session.latitude(), self.session.longitude()) {
            (Some(lat), Some(lon)) => {
                println!("📍 Latitude: {lat}");
                println!("📍 Longitude: {lon}");
            }
            _ if self.session.location_requested() => {
                info("Waiting for permission or location data...");
            }
            _ => info("Use 'locate' to capture coordinates."),
        }
    }

    fn print_status(&self) {
        match self.session.photo() {
            Some(p) => println!("📸 Photo: captured ({} bytes)", p.len()),
            None => println!("📸 Photo: none"),
        }
        self.print_location();
        println!("🌳 Entries this session: {}", self.session.entries().len());
    }

    fn submit<I>(&mut self, lines: &mut I) -> AppResult<()>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let Some(raw) = read_form(lines, &self.ctx.template, &self.ctx.catalog)? else {
            warning("Form cancelled.");
            return Ok(());
        };

        let form = self.ctx.catalog.build_form(raw)?;
        let before = self.session.entries().len();

        match self.ctx.workflow.submit(&mut self.session, &form) {
            Ok(receipt) => {
                print_receipt(&receipt);
                Ok(())
            }
            Err(e) if e.is_external() => {
                if self.session.entries().len() > before {
                    warning("Entry kept in this session's list but NOT saved to the shared sheet.");
                }
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    fn print_entries(&self) {
        let entries = self.session.entries();
        if entries.is_empty() {
            info("No entries this session yet.");
            return;
        }
        header("Your entries this session");
        print!("{}", entries_table(entries));
    }

    fn export(&mut self, arg: &str) -> AppResult<()> {
        let mut parts = arg.split_whitespace();
        let format = parts
            .next()
            .and_then(ExportFormat::parse)
            .ok_or_else(|| AppError::InvalidOption("usage: export <csv|xlsx|json> [FILE]".into()))?;
        let file = parts.next().map(expand_tilde);

        if let Some(f) = &file
            && f.exists()
        {
            warning(format!("Overwriting {}", f.display()));
        }

        ExportLogic::export(
            self.session.entries(),
            format,
            file.as_deref(),
            &self.ctx.export_dir,
            true,
        )?;
        Ok(())
    }
}

/// Ask the form fields one by one. `None` when input ends early.
fn read_form<I>(
    lines: &mut I,
    template: &IdTemplate,
    catalog: &Catalog,
) -> AppResult<Option<TreeForm>>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(suffix) = ask(lines, "Tree Name (Suffix only): ")? else {
        return Ok(None);
    };
    println!("🔖 Full Tree Name: {}", template.compose(&suffix));

    let species = loop {
        let Some(answer) = ask(lines, "Species (name or number, 'options' lists them): ")? else {
            return Ok(None);
        };
        if answer.eq_ignore_ascii_case("options") {
            print_catalog(catalog);
            continue;
        }
        break answer;
    };
    let Some(height) = ask(lines, "Overall Height (m): ")? else {
        return Ok(None);
    };
    let Some(dbh) = ask(lines, "DBH (cm): ")? else {
        return Ok(None);
    };
    let Some(canopy) = ask(lines, "Canopy Diameter (cm): ")? else {
        return Ok(None);
    };

    Ok(Some(TreeForm {
        suffix,
        species,
        height,
        dbh,
        canopy,
    }))
}

fn ask<I>(lines: &mut I, label: &str) -> AppResult<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    prompt(label);
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn prompt(label: &str) {
    print!("{label}");
    io::stdout().flush().ok();
}
