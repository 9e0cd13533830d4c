use crate::shortcuts::error::LnkError;
use crate::utils::{
    encoding::base64_encode_standard,
    nom_helper::{Endian, nom_unsigned_four_bytes, nom_unsigned_two_bytes},
    strings::extract_utf16_string,
};
use common::windows::{ColorFlags, ConsoleProps, CursorSize, FontFamily, FontWeight};
use nom::bytes::complete::take;

/// Parse the console properties payload. Window geometry, font and history
/// settings for console targets
pub(crate) fn parse_console(data: &[u8]) -> Result<ConsoleProps, LnkError> {
    let (input, fill_attributes) = nom_unsigned_two_bytes(data, Endian::Le)?;
    let (input, popup_fill_attributes) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, screen_width_buffer_size) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, screen_height_buffer_size) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, window_width) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, window_height) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, window_x_coordinate) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, window_y_coordinate) = nom_unsigned_two_bytes(input, Endian::Le)?;

    let (input, _unused1) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, _unused2) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let (input, _font_size_x) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, font_size) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, font_family) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, font_weight) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let face_name_size: u8 = 64;
    let (input, face_name_data) = take(face_name_size)(input)?;

    let (input, cursor_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, full_screen) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, quick_edit) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, insert_mode) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, automatic_position) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, history_buffer_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, number_history_buffers) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, duplicates_allowed_history) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let color_table_size: u8 = 64;
    let (_, color_table) = take(color_table_size)(input)?;

    let console = ConsoleProps {
        fill_attributes: get_color(&fill_attributes),
        popup_fill_attributes: get_color(&popup_fill_attributes),
        screen_width_buffer_size,
        screen_height_buffer_size,
        window_width,
        window_height,
        window_x_coordinate,
        window_y_coordinate,
        font_size,
        font_family: get_family(&font_family),
        font_weight: get_weight(&font_weight),
        face_name: extract_utf16_string(face_name_data),
        cursor_size: get_cursor(&cursor_size),
        full_screen,
        quick_edit,
        insert_mode,
        automatic_position,
        history_buffer_size,
        number_history_buffers,
        duplicates_allowed_history,
        color_table: base64_encode_standard(color_table),
    };

    Ok(console)
}

/// Get console fill color flags
fn get_color(color: &u16) -> Vec<ColorFlags> {
    let masks = [
        (0x1, ColorFlags::ForegroundBlue),
        (0x2, ColorFlags::ForegroundGreen),
        (0x4, ColorFlags::ForegroundRed),
        (0x8, ColorFlags::ForegroundIntensity),
        (0x10, ColorFlags::BackgroundBlue),
        (0x20, ColorFlags::BackgroundGreen),
        (0x40, ColorFlags::BackgroundRed),
        (0x80, ColorFlags::BackgroundIntensity),
    ];

    let mut colors = Vec::new();
    for (mask, flag) in masks {
        if (color & mask) == mask {
            colors.push(flag);
        }
    }
    colors
}

/// Get Font Family
fn get_family(font: &u32) -> FontFamily {
    // Font Family is last 28 bits. First 4 bits may be Font Pitch
    let start_bit = 3;
    let bits = 27;
    let bit_value = ((1 << bits) - 1) << start_bit;

    let font_value = font & bit_value;
    match font_value {
        0x0 => FontFamily::DontCare,
        0x10 => FontFamily::Roman,
        0x20 => FontFamily::Swiss,
        0x30 => FontFamily::Modern,
        0x40 => FontFamily::Script,
        0x50 => FontFamily::Decorative,
        _ => FontFamily::Unknown,
    }
}

/// Get Font Weight
fn get_weight(font: &u32) -> FontWeight {
    let regular = 700;

    if font < &regular {
        FontWeight::Regular
    } else {
        FontWeight::Bold
    }
}

/// Get Cursor Size
fn get_cursor(cursor: &u32) -> CursorSize {
    let small = 25;
    let normal = 50;
    let large = 100;

    if cursor <= &small {
        CursorSize::Small
    } else if cursor > &small && cursor <= &normal {
        CursorSize::Normal
    } else if cursor > &normal && cursor <= &large {
        CursorSize::Large
    } else {
        CursorSize::Unknown
    }
}
