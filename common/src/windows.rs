use serde::Serialize;

/// Fully decoded shell link (`.lnk`) file. Sections appear in the order the
/// format stores them. Optional sections are `None` when the header flags do
/// not announce them.
#[derive(Debug, PartialEq, Serialize)]
pub struct LnkFile {
    pub source_path: String,
    pub header: ShellLinkHeader,
    pub target_idlist: Option<TargetIdList>,
    pub link_info: Option<LinkInfo>,
    pub string_data: StringDataSet,
    pub extra_data: Vec<ExtraDataBlock>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ShellLinkHeader {
    pub link_flags: Vec<LinkFlags>,
    pub attribute_flags: Vec<AttributeFlags>,
    pub created: String,
    pub accessed: String,
    pub modified: String,
    pub file_size: u32,
    pub icon_index: i32,
    pub show_command: ShowCommand,
    pub hotkey: HotKey,
    pub reserved1: u16,
    pub reserved2: u32,
    pub reserved3: u32,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum LinkFlags {
    HasTargetIdList,
    HasLinkInfo,
    HasName,
    HasRelativePath,
    HasWorkingDirectory,
    HasArguments,
    HasIconLocation,
    IsUnicode,
    ForceNoLinkInfo,
    HasExpString,
    RunInSeparateProcess,
    HasLogo3Id,
    HasDarwinId,
    RunAsUser,
    HasExpIcon,
    NoPidlAlias,
    ForceUncName,
    RunWithShimLayer,
    ForceNoLinkTrack,
    EnableTargetMetadata,
    DisableLinkPathTracking,
    DisableKnownFolderTracking,
    DisableKnownFolderAlias,
    AllowLinkToLink,
    UnaliasOnSave,
    PersistVolumeIdRelative,
    PreferEnvironmentPath,
    KeepLocalIdListForUncTarget,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum AttributeFlags {
    ReadOnly,
    Hidden,
    System,
    Volume,
    Directory,
    Archive,
    Device,
    Normal,
    Temporary,
    SparseFile,
    ReparsePoint,
    Compressed,
    Offline,
    NotContentIndexed,
    Encrypted,
}

/// Window activation state requested for the launched target. Values other
/// than the three meaningful ones decode as `ShowNormal`.
#[derive(Debug, PartialEq, Serialize)]
pub enum ShowCommand {
    ShowNormal,
    ShowMaximized,
    ShowMinNoActive,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HotKey {
    pub keycode: u8,
    pub modifier: u8,
}

/// Sequence of variable-size item IDs addressing the link target in the
/// shell namespace. Item payloads are preserved as raw bytes.
#[derive(Debug, PartialEq, Serialize)]
pub struct TargetIdList {
    pub items: Vec<ItemId>,
    pub terminator: u16,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ItemId {
    pub size: u16,
    pub data: Vec<u8>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct LinkInfo {
    pub size: u32,
    pub header_size: u32,
    pub flags: Vec<LinkInfoFlags>,
    pub volume_id_offset: u32,
    pub local_base_path_offset: u32,
    pub common_network_relative_link_offset: u32,
    pub common_path_suffix_offset: u32,
    pub volume_id: Option<VolumeId>,
    pub local_base_path: Option<String>,
    pub network_link: Option<NetworkRelativeLink>,
    pub common_path_suffix: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum LinkInfoFlags {
    VolumeIdAndLocalBasePath,
    CommonNetworkRelativeLinkAndPathSuffix,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VolumeId {
    pub size: u32,
    pub drive_type: DriveType,
    pub drive_serial: String,
    pub label_offset: u32,
    pub volume_label: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum DriveType {
    DriveUnknown,
    DriveNoRootDir,
    DriveRemovable,
    DriveFixed,
    DriveRemote,
    DriveCdrom,
    DriveRamdisk,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NetworkRelativeLink {
    pub size: u32,
    pub flags: Vec<NetworkFlags>,
    pub net_name_offset: u32,
    pub device_name_offset: u32,
    pub provider_type: NetworkProviderType,
    pub net_name: Option<String>,
    pub device_name: Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum NetworkFlags {
    ValidDevice,
    ValidNetType,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum NetworkProviderType {
    WnncNetAvid,
    WnncNetDocuspace,
    WnncNetMangsoft,
    WnncNetSernet,
    WnncNetRiverFront1,
    WnncNetRiverFront2,
    WnncNetDecorb,
    WnncNetProtstor,
    WnncNetFjRedir,
    WnncNetDistinct,
    WnncNetTwins,
    WnncNetRdr2Sample,
    WnncNetCsc,
    WnncNet3In1,
    WnncNetExtendNet,
    WnncNetStac,
    WnncNetFoxbat,
    WnncNetYahoo,
    WnncNetExifs,
    WnncNetDav,
    WnncNetKnoware,
    WnncNetObjectDire,
    WnncNetMasfax,
    WnncNetHobNfs,
    WnncNetShiva,
    WnncNetIbmal,
    WnncNetLock,
    WnncNetTermsrv,
    WnncNetSrt,
    WnncNetQuincy,
    WnncNetOpenafs,
    WnncNetAvid1,
    WnncNetDfs,
    WnncNetKwnp,
    WnncNetZenworks,
    WnncNetDriveOnWeb,
    WnncNetVmware,
    WnncNetRsfx,
    WnncNetMfiles,
    WnncNetMsNfs,
    WnncNetGoogle,
    Unknown,
}

/// The five optional strings following LinkInfo, in storage order.
#[derive(Debug, PartialEq, Serialize)]
pub struct StringDataSet {
    pub name: Option<StringData>,
    pub relative_path: Option<StringData>,
    pub working_dir: Option<StringData>,
    pub arguments: Option<StringData>,
    pub icon_location: Option<StringData>,
}

/// One counted string. For Unicode links `character_count` holds the byte
/// length of the UTF-16 run (twice the stored count) and `raw` is empty.
/// For code-page links `raw` keeps the undecoded bytes and `text` is a
/// lossy UTF-8 rendering of them.
#[derive(Debug, PartialEq, Serialize)]
pub struct StringData {
    pub character_count: u32,
    pub text: String,
    pub raw: Vec<u8>,
}

/// Trailing extra-data blocks in encounter order. Blocks with signatures
/// outside the documented range are preserved as `Unknown`.
#[derive(Debug, PartialEq, Serialize)]
pub enum ExtraDataBlock {
    ConsoleProps(ConsoleProps),
    ConsoleFeProps(ConsoleFeProps),
    DarwinProps(DarwinProps),
    EnvironmentProps(EnvironmentProps),
    IconEnvironmentProps(EnvironmentProps),
    KnownFolderProps(KnownFolderProps),
    PropertyStoreProps(PropertyStoreProps),
    ShimProps(ShimProps),
    SpecialFolderProps(SpecialFolderProps),
    TrackerProps(TrackerProps),
    VistaAndAboveIdListProps(VistaIdListProps),
    Unknown(UnknownBlock),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ConsoleProps {
    pub fill_attributes: Vec<ColorFlags>,
    pub popup_fill_attributes: Vec<ColorFlags>,
    pub screen_width_buffer_size: u16,
    pub screen_height_buffer_size: u16,
    pub window_width: u16,
    pub window_height: u16,
    pub window_x_coordinate: u16,
    pub window_y_coordinate: u16,
    pub font_size: u16,
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    pub face_name: String,
    pub cursor_size: CursorSize,
    pub full_screen: u32,
    pub quick_edit: u32,
    pub insert_mode: u32,
    pub automatic_position: u32,
    pub history_buffer_size: u32,
    pub number_history_buffers: u32,
    pub duplicates_allowed_history: u32,
    pub color_table: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum ColorFlags {
    ForegroundBlue,
    ForegroundGreen,
    ForegroundRed,
    ForegroundIntensity,
    BackgroundBlue,
    BackgroundGreen,
    BackgroundRed,
    BackgroundIntensity,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum FontFamily {
    DontCare,
    Roman,
    Swiss,
    Modern,
    Script,
    Decorative,
    Unknown,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum CursorSize {
    Small,
    Normal,
    Large,
    Unknown,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ConsoleFeProps {
    pub code_page: u32,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DarwinProps {
    pub darwin_data_ansi: Vec<u8>,
    pub darwin_data_unicode: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct EnvironmentProps {
    pub target_ansi: Vec<u8>,
    pub target_unicode: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct KnownFolderProps {
    pub known_folder_id: String,
    pub offset: u32,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PropertyStoreProps {
    pub stores: Vec<PropertyStore>,
}

/// One serialized property storage envelope. Property values themselves are
/// kept as opaque bytes.
#[derive(Debug, PartialEq, Serialize)]
pub struct PropertyStore {
    pub storage_size: u32,
    pub version: u32,
    pub format_id: String,
    pub values: Vec<u8>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ShimProps {
    pub layer_name: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SpecialFolderProps {
    pub special_folder_id: u32,
    pub offset: u32,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct TrackerProps {
    pub length: u32,
    pub version: u32,
    pub machine_id: String,
    pub droid_volume_id: String,
    pub droid_file_id: String,
    pub birth_droid_volume_id: String,
    pub birth_droid_file_id: String,
    pub droid_file_created: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VistaIdListProps {
    pub idlist: TargetIdList,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct UnknownBlock {
    pub signature: u32,
    pub data: Vec<u8>,
}
